//! Core types for the fixture-forge framework.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line tool:
//!
//! - [`StringRules`], [`NumberRules`], [`BooleanRules`], [`ArrayRules`] - Declarative rule sets
//! - [`FixtureValue`] - A generated scalar or array value
//! - [`InvalidValue`] - A rule-violating value with a human-readable reason
//! - [`FixturePlan`] - Fields and their rules, loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    └─── fixture-generator  (draws values that satisfy or violate the rules)
//!             │
//!             └─── fixture-forge (CLI: plan in, JSON fixtures out)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FieldKind, FixturePlan};
//!
//! let plan = FixturePlan::from_yaml(r#"
//! seed: 42
//! fields:
//!   - name: username
//!     kind: string
//!     rules:
//!       minLength: 3
//!       maxLength: 12
//! "#).unwrap();
//!
//! let field = plan.get_field("username").unwrap();
//! assert!(matches!(field.kind, FieldKind::String { .. }));
//! ```

pub mod rules;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use rules::{
    ArrayRules, BooleanRules, DecimalRules, IntegerRules, NumberRules, RuleNumber, StringRules,
};
pub use schema::{FieldDefinition, FieldKind, FixturePlan, SchemaError};
pub use values::{FixtureValue, InvalidValue};
