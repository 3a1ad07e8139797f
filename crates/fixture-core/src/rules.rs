//! Declarative rule sets for each primitive kind.
//!
//! Every field is optional; an empty rule set means "anything of this kind".
//! Field names follow the camelCase spelling used by JSON-Schema style
//! validation rules (`maxLength`, `multipleOf`, `uniqueItems`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rules for string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRules {
    /// Maximum length (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Minimum length (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Regular expression the value must match.
    ///
    /// Carried through for completeness; the generator does not sample from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// The only legal value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<String>,
}

impl StringRules {
    /// Rules fixing the length to the inclusive range `[min, max]`.
    pub fn length(min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..Self::default()
        }
    }

    /// Rules fixing the value to a single constant.
    pub fn constant(value: impl Into<String>) -> Self {
        Self {
            constant: Some(value.into()),
            ..Self::default()
        }
    }

    /// The constant, if set to a non-empty string.
    ///
    /// An empty constant places no restriction on the value.
    pub fn effective_constant(&self) -> Option<&str> {
        self.constant.as_deref().filter(|c| !c.is_empty())
    }
}

/// A number type usable in [`NumberRules`].
///
/// Bound arithmetic happens in `f64` for both integers and decimals so that
/// integer and decimal draws share one bound computation.
pub trait RuleNumber: Copy + PartialOrd + fmt::Display + fmt::Debug {
    /// Exact (for integers within the safe range) floating point view.
    fn to_f64(self) -> f64;
}

impl RuleNumber for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl RuleNumber for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Rules for numeric values, shared by integers and decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRules<T> {
    /// The value must be a multiple of this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<T>,

    /// Exclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<T>,

    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,

    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<T>,

    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<T>,

    /// The only legal value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<T>,
}

/// Rules for integer values.
pub type IntegerRules = NumberRules<i64>;

/// Rules for decimal values.
pub type DecimalRules = NumberRules<f64>;

impl<T: RuleNumber> NumberRules<T> {
    /// Rules with inclusive bounds `[gte, lte]`.
    pub fn inclusive(gte: T, lte: T) -> Self {
        Self {
            multiple_of: None,
            gt: None,
            lt: None,
            gte: Some(gte),
            lte: Some(lte),
            constant: None,
        }
    }

    /// Rules with exclusive bounds `(gt, lt)`.
    pub fn exclusive(gt: T, lt: T) -> Self {
        Self {
            multiple_of: None,
            gt: Some(gt),
            lt: Some(lt),
            gte: None,
            lte: None,
            constant: None,
        }
    }

    /// Set the `multipleOf` step.
    pub fn with_multiple_of(mut self, step: T) -> Self {
        self.multiple_of = Some(step);
        self
    }

    /// The `multipleOf` step, if set to a usable (non-zero) value.
    pub fn step(&self) -> Option<T> {
        self.multiple_of.filter(|m| {
            let m = m.to_f64();
            m != 0.0 && !m.is_nan()
        })
    }

    /// The same rules expressed over decimals.
    pub fn to_decimal_rules(&self) -> DecimalRules {
        NumberRules {
            multiple_of: self.multiple_of.map(RuleNumber::to_f64),
            gt: self.gt.map(RuleNumber::to_f64),
            lt: self.lt.map(RuleNumber::to_f64),
            gte: self.gte.map(RuleNumber::to_f64),
            lte: self.lte.map(RuleNumber::to_f64),
            constant: self.constant.map(RuleNumber::to_f64),
        }
    }
}

/// Rules for boolean values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanRules {
    /// The only legal value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
}

/// Collection-level rules for arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayRules {
    /// Maximum number of items (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,

    /// Minimum number of items (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,

    /// Whether all items must be distinct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
}

impl ArrayRules {
    /// Rules fixing the item count to `[min, max]`.
    pub fn items(min: usize, max: usize) -> Self {
        Self {
            max_items: Some(max),
            min_items: Some(min),
            unique_items: None,
        }
    }

    /// Require distinct items.
    pub fn unique(mut self) -> Self {
        self.unique_items = Some(true);
        self
    }
}
