//! Deterministic fixture value generator.
//!
//! This crate provides the [`FixtureGenerator`] which produces values that
//! satisfy ("valid") or deliberately break ("invalid") declarative rule sets.
//! The generator draws from a seeded linear congruential generator, so the
//! same seed and the same sequence of calls always yield the same values.
//!
//! # Architecture
//!
//! ```text
//! FixturePlan (YAML)          rules (StringRules, IntegerRules, ...)
//!        │                               │
//!        ▼                               ▼
//! ┌──────────────────────────────────────────┐
//! │            FixtureGenerator              │
//! │                                          │
//! │  - seed                                  │
//! │  - rng (Lcg, wrapping u32 state)         │
//! └────────────────────┬─────────────────────┘
//!                      │
//!                      ▼
//!   valid value + [InvalidValue { value, description }]
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{IntegerRules, StringRules};
//! use fixture_generator::FixtureGenerator;
//!
//! let mut generator = FixtureGenerator::new(1234567);
//!
//! let name = generator.valid_string(&StringRules::length(3, 3));
//! assert_eq!(name.len(), 3);
//!
//! let invalid = generator.invalid_integer(&IntegerRules::inclusive(0, 10)).unwrap();
//! assert_eq!(invalid[0].description, "less than 0");
//! assert_eq!(invalid[1].description, "greater than 10");
//! ```
//!
//! # Samplers
//!
//! - `valid_string` / `invalid_string` - length and constant rules
//! - `valid_integer` / `invalid_integer` - bounds, `multipleOf`, constant
//! - `valid_decimal` / `invalid_decimal` - bounds, `multipleOf`, constant
//! - `valid_boolean` / `invalid_boolean` - constant
//! - `valid_array` - item count and uniqueness over a caller-supplied item producer
//! - `invalid_array` - accepted but inert, always empty

pub mod generator;
pub mod generators;
pub mod lcg;
pub mod plan;

// Re-exports for convenience
pub use generator::{FixtureGenerator, GeneratorError};
pub use lcg::Lcg;
pub use plan::{FieldFixtures, FieldFixturesIterator, InvalidCase};
