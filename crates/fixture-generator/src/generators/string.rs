//! String value generators.

use crate::generators::boolean::valid_boolean;
use crate::generators::numeric::integer_between;
use crate::lcg::Lcg;
use fixture_core::{BooleanRules, InvalidValue, StringRules};

/// Characters drawn for generated strings.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 ~!@#$%^&*()-_=+[{]};:,<.>?";

/// Generate a string satisfying the rules.
///
/// `minLength` defaults to 1 and `maxLength` to `minLength + 10`. A constant
/// is returned as-is without consuming randomness.
pub fn valid_string(rng: &mut Lcg, rules: &StringRules) -> String {
    if let Some(constant) = rules.effective_constant() {
        return constant.to_string();
    }

    let min_length = rules.min_length.map_or(1, length_to_i64);
    let max_length = rules
        .max_length
        .map_or(min_length.saturating_add(10), length_to_i64);
    string_in_length_range(rng, min_length, max_length)
}

/// Convert a rule length to signed length arithmetic, saturating at `i64::MAX`.
pub(crate) fn length_to_i64(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

/// Generate a string whose length is drawn from `[min, max]`.
///
/// Non-positive lengths yield an empty string but still consume the length draw.
pub(crate) fn string_in_length_range(rng: &mut Lcg, min: i64, max: i64) -> String {
    let length = rng.next_in_range(min, max).max(0) as usize;

    (0..length)
        .map(|_| char::from(ALPHABET[rng.next_index(ALPHABET.len())]))
        .collect()
}

/// Generate a string of exactly `length` characters.
pub(crate) fn string_of_length(rng: &mut Lcg, length: i64) -> String {
    string_in_length_range(rng, length, length)
}

/// Generate values that each break one string rule, followed by a number and
/// a boolean.
pub fn invalid_string(rng: &mut Lcg, rules: &StringRules) -> Vec<InvalidValue> {
    let mut invalid = Vec::new();

    if let Some(constant) = rules.effective_constant() {
        invalid.push(InvalidValue::new(
            format!("{constant}_invalid"),
            "does not match the specified constant.",
        ));
    }

    if let Some(max_length) = rules.max_length {
        invalid.push(InvalidValue::new(
            string_of_length(rng, length_to_i64(max_length).saturating_add(1)),
            "exceeds the maximum length.",
        ));
    }

    if let Some(min_length) = rules.min_length {
        invalid.push(InvalidValue::new(
            string_of_length(rng, length_to_i64(min_length) - 1),
            "does not reach the minimum length.",
        ));
    }

    invalid.push(InvalidValue::new(integer_between(rng, 0.0, 10_000.0), "a number"));
    invalid.push(InvalidValue::new(
        valid_boolean(rng, &BooleanRules::default()),
        "a boolean",
    ));

    invalid
}
