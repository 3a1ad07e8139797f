//! Individual value generators for each primitive kind.
//!
//! Every function takes the session's [`Lcg`](crate::lcg::Lcg) explicitly, so
//! the sequence of values is a pure function of the seed and the order of
//! calls. Functions named `valid_*` return one value that satisfies every rule
//! present; `invalid_*` return one record per rule present plus wrong-typed
//! values. Arrays are assembled through
//! [`FixtureGenerator::valid_array`](crate::FixtureGenerator::valid_array),
//! which threads the session into the item producer.

pub mod array;
pub mod boolean;
pub mod numeric;
pub mod string;

pub use array::{array_length, collect_items};
pub use boolean::{invalid_boolean, valid_boolean};
pub use numeric::{invalid_decimal, invalid_integer, valid_decimal, valid_integer};
pub use string::{invalid_string, valid_string, ALPHABET};
