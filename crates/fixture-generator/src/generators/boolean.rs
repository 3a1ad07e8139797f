//! Boolean value generators.

use crate::generators::numeric::integer_between;
use crate::generators::string::string_of_length;
use crate::lcg::Lcg;
use fixture_core::{BooleanRules, InvalidValue};

/// Generate a boolean: the constant if set, otherwise a fair coin.
pub fn valid_boolean(rng: &mut Lcg, rules: &BooleanRules) -> bool {
    match rules.constant {
        Some(constant) => constant,
        None => rng.next_f64() < 0.5,
    }
}

/// Generate the negated constant (if set), a string and a number.
pub fn invalid_boolean(rng: &mut Lcg, rules: &BooleanRules) -> Vec<InvalidValue> {
    let mut invalid = Vec::new();

    if let Some(constant) = rules.constant {
        invalid.push(InvalidValue::new(
            !constant,
            format!("does not equal {constant}"),
        ));
    }

    invalid.push(InvalidValue::new(string_of_length(rng, 10), "a string"));
    invalid.push(InvalidValue::new(integer_between(rng, 0.0, 10_000.0), "a number"));

    invalid
}
