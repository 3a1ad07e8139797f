//! Running a [`FixturePlan`] through a generator.
//!
//! For each field, in plan order, the runner draws one valid value and then
//! the field's invalid cases: `is not provided` first for required fields,
//! then one case per invalid value of the item kind. Array fields get the same
//! item-kind cases as scalars; array-level cases are never generated. Each
//! case is titled the way generated negative tests are named.

use crate::generator::{FixtureGenerator, GeneratorError};
use fixture_core::{FieldDefinition, FieldKind, FixturePlan, FixtureValue, InvalidValue};
use serde::Serialize;

/// One negative test case for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidCase {
    /// Test title, e.g. `returns an error when exceeds the maximum length.`
    pub title: String,
    /// The offending value; `None` when the field is left out
    pub value: Option<FixtureValue>,
    /// Why the value is invalid
    pub description: String,
}

impl From<InvalidValue> for InvalidCase {
    fn from(invalid: InvalidValue) -> Self {
        Self {
            title: format!("returns an error when {}", invalid.description),
            value: Some(invalid.value),
            description: invalid.description,
        }
    }
}

impl InvalidCase {
    /// Case for a required field that is left out.
    pub fn not_provided() -> Self {
        let description = "is not provided".to_string();
        Self {
            title: format!("returns an error when {description}"),
            value: None,
            description,
        }
    }
}

/// Fixtures generated for one plan field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFixtures {
    /// Field name
    pub name: String,
    /// Primitive kind (`string`, `integer`, `decimal`, `boolean`)
    pub kind: &'static str,
    /// Whether the field is an array of `kind`
    pub array: bool,
    /// Whether omitting the field is an error
    pub required: bool,
    /// A value satisfying every rule
    pub valid: FixtureValue,
    /// Values each violating one rule or the type
    pub invalid: Vec<InvalidCase>,
}

impl FixtureGenerator {
    /// Generate one valid value for a field kind.
    pub fn valid_value(&mut self, kind: &FieldKind) -> Result<FixtureValue, GeneratorError> {
        Ok(match kind {
            FieldKind::String { rules } => self.valid_string(rules).into(),
            FieldKind::Integer { rules } => self.valid_integer(rules)?.into(),
            FieldKind::Decimal { rules } => self.valid_decimal(rules)?.into(),
            FieldKind::Boolean { rules } => self.valid_boolean(rules).into(),
        })
    }

    /// Generate the invalid values for a field kind.
    pub fn invalid_values(
        &mut self,
        kind: &FieldKind,
    ) -> Result<Vec<InvalidValue>, GeneratorError> {
        Ok(match kind {
            FieldKind::String { rules } => self.invalid_string(rules),
            FieldKind::Integer { rules } => self.invalid_integer(rules)?,
            FieldKind::Decimal { rules } => self.invalid_decimal(rules),
            FieldKind::Boolean { rules } => self.invalid_boolean(rules),
        })
    }

    /// Generate the fixtures for a single field.
    ///
    /// Errors are wrapped in [`GeneratorError::Field`] naming the field.
    pub fn field_fixtures(
        &mut self,
        field: &FieldDefinition,
    ) -> Result<FieldFixtures, GeneratorError> {
        tracing::debug!(
            field = %field.name,
            kind = field.kind.name(),
            array = field.is_array(),
            "Generating field fixtures"
        );

        self.generate_field(field).map_err(|source| GeneratorError::Field {
            field: field.name.clone(),
            source: Box::new(source),
        })
    }

    fn generate_field(
        &mut self,
        field: &FieldDefinition,
    ) -> Result<FieldFixtures, GeneratorError> {
        let kind = &field.kind;

        let valid = match &field.array {
            Some(rules) => FixtureValue::Array(self.valid_array(rules, |g| g.valid_value(kind))?),
            None => self.valid_value(kind)?,
        };

        let mut invalid = Vec::new();
        if field.required {
            invalid.push(InvalidCase::not_provided());
        }

        let mut values = self.invalid_values(kind)?;
        if let Some(rules) = &field.array {
            values.extend(self.invalid_array(
                |g| g.valid_value(kind),
                |g| g.invalid_values(kind),
                rules,
            ));
        }
        invalid.extend(values.into_iter().map(InvalidCase::from));

        Ok(FieldFixtures {
            name: field.name.clone(),
            kind: kind.name(),
            array: field.is_array(),
            required: field.required,
            valid,
            invalid,
        })
    }

    /// Lazily generate fixtures for every field in the plan, in order.
    pub fn fixtures<'a>(&'a mut self, plan: &'a FixturePlan) -> FieldFixturesIterator<'a> {
        FieldFixturesIterator {
            generator: self,
            fields: plan.fields.iter(),
        }
    }

    /// Generate fixtures for every field in the plan, stopping at the first error.
    pub fn run_plan(
        &mut self,
        plan: &FixturePlan,
    ) -> Result<Vec<FieldFixtures>, GeneratorError> {
        let fixtures = self.fixtures(plan).collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            seed = self.seed(),
            fields = fixtures.len(),
            invalid_cases = fixtures.iter().map(|f| f.invalid.len()).sum::<usize>(),
            "Generated fixtures"
        );

        Ok(fixtures)
    }
}

/// Iterator that lazily generates field fixtures.
pub struct FieldFixturesIterator<'a> {
    generator: &'a mut FixtureGenerator,
    fields: std::slice::Iter<'a, FieldDefinition>,
}

impl Iterator for FieldFixturesIterator<'_> {
    type Item = Result<FieldFixtures, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.fields.next()?;
        Some(self.generator.field_fixtures(field))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}

impl ExactSizeIterator for FieldFixturesIterator<'_> {}
