//! Fixture plan definitions.
//!
//! A fixture plan lists the fields that need fixtures, the primitive kind of
//! each field, its rules and an optional array wrapper. Plans are loaded from
//! YAML:
//!
//! ```yaml
//! seed: 1234567
//! fields:
//!   - name: username
//!     kind: string
//!     rules:
//!       minLength: 3
//!       maxLength: 12
//!   - name: scores
//!     kind: integer
//!     rules:
//!       gte: 0
//!       lte: 100
//!     array:
//!       minItems: 2
//!       maxItems: 4
//!       uniqueItems: true
//! ```
//!
//! Field order is significant: the generator walks fields in declaration
//! order, so reordering a plan changes every value drawn after the move.

use crate::rules::{ArrayRules, BooleanRules, DecimalRules, IntegerRules, StringRules};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for plan operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading plan file
    #[error("Failed to read plan file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two fields share a name
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Field not found in plan
    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

// ============================================================================
// Field Types
// ============================================================================

/// The primitive kind of a field together with its rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// String field
    String {
        #[serde(default)]
        rules: StringRules,
    },

    /// Integer field
    Integer {
        #[serde(default)]
        rules: IntegerRules,
    },

    /// Decimal field
    Decimal {
        #[serde(default)]
        rules: DecimalRules,
    },

    /// Boolean field
    Boolean {
        #[serde(default)]
        rules: BooleanRules,
    },
}

impl FieldKind {
    /// Lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Integer { .. } => "integer",
            Self::Decimal { .. } => "decimal",
            Self::Boolean { .. } => "boolean",
        }
    }
}

/// A field that needs fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Primitive kind and rules
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Present when the field is an array of `kind`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<ArrayRules>,

    /// Whether omitting the field is itself an error
    #[serde(default)]
    pub required: bool,
}

impl FieldDefinition {
    /// Create a new scalar field definition.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            array: None,
            required: false,
        }
    }

    /// Create a new array field definition.
    pub fn array(name: impl Into<String>, kind: FieldKind, rules: ArrayRules) -> Self {
        Self {
            name: name.into(),
            kind,
            array: Some(rules),
            required: false,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether this field is an array.
    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Full fixture plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixturePlan {
    /// Seed for the generator; callers may override it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Field definitions, in generation order
    pub fields: Vec<FieldDefinition>,

    /// Cached field lookup (not serialized)
    #[serde(skip)]
    field_map: HashMap<String, usize>,
}

impl FixturePlan {
    /// Create a new plan from a list of fields.
    pub fn new(seed: Option<u32>, fields: Vec<FieldDefinition>) -> Result<Self, SchemaError> {
        let mut plan = Self {
            seed,
            fields,
            field_map: HashMap::new(),
        };
        plan.build_field_map()?;
        Ok(plan)
    }

    /// Load a plan from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut plan: FixturePlan = serde_yaml::from_str(yaml)?;
        plan.build_field_map()?;
        Ok(plan)
    }

    /// Build the internal field lookup map, rejecting duplicate names.
    fn build_field_map(&mut self) -> Result<(), SchemaError> {
        self.field_map.clear();
        for (idx, field) in self.fields.iter().enumerate() {
            if self.field_map.insert(field.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.field_map
            .get(name)
            .and_then(|&idx| self.fields.get(idx))
    }

    /// Get a field by name, failing if it is absent.
    pub fn field(&self, name: &str) -> Result<&FieldDefinition, SchemaError> {
        self.get_field(name)
            .ok_or_else(|| SchemaError::FieldNotFound(name.to_string()))
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_PLAN: &str = r#"
seed: 1234567
fields:
  - name: username
    kind: string
    required: true
    rules:
      minLength: 3
      maxLength: 12
  - name: age
    kind: integer
    rules:
      gte: 0
      lte: 130
  - name: ratio
    kind: decimal
    rules:
      gt: 0
      lt: 1
      multipleOf: 0.25
  - name: active
    kind: boolean
  - name: tags
    kind: string
    rules:
      maxLength: 8
    array:
      minItems: 1
      maxItems: 3
      uniqueItems: true
"#;

    #[test]
    fn test_parse_plan() {
        let plan = FixturePlan::from_yaml(SAMPLE_PLAN).unwrap();

        assert_eq!(plan.seed, Some(1234567));
        assert_eq!(
            plan.field_names(),
            vec!["username", "age", "ratio", "active", "tags"]
        );

        let username = plan.get_field("username").unwrap();
        assert_eq!(
            username.kind,
            FieldKind::String {
                rules: StringRules::length(3, 12)
            }
        );
        assert!(!username.is_array());

        let ratio = plan.get_field("ratio").unwrap();
        if let FieldKind::Decimal { rules } = &ratio.kind {
            assert_eq!(rules.gt, Some(0.0));
            assert_eq!(rules.multiple_of, Some(0.25));
        } else {
            panic!("Expected decimal field, got {:?}", ratio.kind);
        }

        let active = plan.get_field("active").unwrap();
        assert_eq!(
            active.kind,
            FieldKind::Boolean {
                rules: BooleanRules::default()
            }
        );

        let tags = plan.get_field("tags").unwrap();
        assert_eq!(tags.array, Some(ArrayRules::items(1, 3).unique()));
    }

    #[test]
    fn test_required_defaults_to_false() {
        let plan = FixturePlan::from_yaml(SAMPLE_PLAN).unwrap();

        assert!(plan.get_field("username").unwrap().required);
        assert!(!plan.get_field("age").unwrap().required);
        assert!(!plan.get_field("tags").unwrap().required);
    }

    #[test]
    fn test_plan_without_seed() {
        let plan = FixturePlan::from_yaml("fields: []").unwrap();

        assert_eq!(plan.seed, None);
        assert!(plan.fields.is_empty());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let yaml = r#"
fields:
  - name: id
    kind: integer
  - name: id
    kind: string
"#;
        let result = FixturePlan::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::DuplicateField(name)) if name == "id"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let yaml = r#"
fields:
  - name: created
    kind: timestamp
"#;
        assert!(matches!(
            FixturePlan::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }

    #[test]
    fn test_field_not_found() {
        let plan = FixturePlan::from_yaml(SAMPLE_PLAN).unwrap();

        assert!(plan.field("age").is_ok());
        assert!(matches!(
            plan.field("missing"),
            Err(SchemaError::FieldNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_PLAN.as_bytes()).unwrap();

        let plan = FixturePlan::from_file(file.path()).unwrap();
        assert_eq!(plan.fields.len(), 5);
    }

    #[test]
    fn test_new_plan() {
        let plan = FixturePlan::new(
            None,
            vec![FieldDefinition::new(
                "flag",
                FieldKind::Boolean {
                    rules: BooleanRules {
                        constant: Some(true),
                    },
                },
            )],
        )
        .unwrap();

        assert_eq!(plan.get_field("flag").unwrap().kind.name(), "boolean");
    }
}
