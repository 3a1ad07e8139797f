//! Numeric value generators.
//!
//! Integers and decimals share one bound computation:
//! `lower = max(gt, gte)` and `upper = min(lt, lte)`, each defaulting to the
//! safe-integer range scaled down by 1000. Strict and inclusive bounds are
//! merged the same way, so `gt: 0` can still yield `0`.

use crate::generator::GeneratorError;
use crate::generators::boolean::valid_boolean;
use crate::generators::string::string_of_length;
use crate::lcg::Lcg;
use fixture_core::{
    BooleanRules, DecimalRules, FixtureValue, IntegerRules, InvalidValue, NumberRules, RuleNumber,
};

/// `Number.MAX_SAFE_INTEGER`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Headroom left for `multipleOf` adjustments.
const BOUND_SCALE: f64 = 1000.0;

const DEFAULT_LOWER: f64 = -MAX_SAFE_INTEGER / BOUND_SCALE;
const DEFAULT_UPPER: f64 = MAX_SAFE_INTEGER / BOUND_SCALE;

/// Resolve the sampling range `[lower, upper]` for the rules.
fn sampling_bounds<T: RuleNumber>(rules: &NumberRules<T>) -> Result<(f64, f64), GeneratorError> {
    let bound = |value: Option<T>, default: f64| value.map_or(default, RuleNumber::to_f64);

    let lower = bound(rules.gt, DEFAULT_LOWER).max(bound(rules.gte, DEFAULT_LOWER));
    let upper = bound(rules.lt, DEFAULT_UPPER).min(bound(rules.lte, DEFAULT_UPPER));

    if lower > upper {
        return Err(GeneratorError::BoundsInverted { lower, upper });
    }

    Ok((lower, upper))
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Draw `floor(lower + next * (upper - lower))`.
pub(crate) fn integer_between(rng: &mut Lcg, lower: f64, upper: f64) -> i64 {
    (lower + rng.next_f64() * (upper - lower)).floor() as i64
}

/// Generate a decimal satisfying the rules.
///
/// With `multipleOf`, the draw is rounded to the nearest multiple and fails if
/// the rounding leaves the bounds.
pub fn valid_decimal(rng: &mut Lcg, rules: &DecimalRules) -> Result<f64, GeneratorError> {
    if let Some(constant) = rules.constant {
        return Ok(constant);
    }

    let (lower, upper) = sampling_bounds(rules)?;
    let mut value = lower + rng.next_f64() * (upper - lower);

    if let Some(step) = rules.step() {
        value = round_half_up(value / step) * step;

        if value < lower || value > upper {
            return Err(GeneratorError::MultipleOutOfBounds {
                value,
                lower,
                upper,
            });
        }
    }

    Ok(value)
}

/// Generate an integer satisfying the rules.
///
/// With `multipleOf`, the remainder is subtracted and the value nudged by one
/// step back inside the bounds if needed.
pub fn valid_integer(rng: &mut Lcg, rules: &IntegerRules) -> Result<i64, GeneratorError> {
    if let Some(constant) = rules.constant {
        return Ok(constant);
    }

    let (lower, upper) = sampling_bounds(rules)?;
    let mut value = (lower + rng.next_f64() * (upper - lower)).floor();

    if let Some(step) = rules.step() {
        let step = step.to_f64();
        value -= value % step;
        if value < lower {
            value += step;
        }
        if value > upper {
            value -= step;
        }
    }

    if value < lower || value > upper {
        return Err(GeneratorError::IntegerOutOfBounds {
            value,
            lower,
            upper,
        });
    }

    Ok(value as i64)
}

/// Render a decimal the way JavaScript's `Number.prototype.toString` does.
///
/// Magnitudes in `[1e-6, 1e21)` print as plain digits; anything else uses
/// exponent form with an explicit sign (`1e-7`, `1.5e+21`).
pub(crate) fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Per-kind offset used to step just past a rule's boundary.
trait Offset: RuleNumber + Into<FixtureValue> {
    fn above(self) -> Self;
    fn below(self) -> Self;
    fn describe(self) -> String;
}

impl Offset for i64 {
    fn above(self) -> Self {
        self.saturating_add(1)
    }

    fn below(self) -> Self {
        self.saturating_sub(1)
    }

    fn describe(self) -> String {
        self.to_string()
    }
}

impl Offset for f64 {
    fn above(self) -> Self {
        self + 0.1
    }

    fn below(self) -> Self {
        self - 0.1
    }

    fn describe(self) -> String {
        format_decimal(self)
    }
}

/// One record per rule present, in rule order.
///
/// `gt` and `lt` are violated by the boundary value itself; no record is
/// adjusted to also honor `multipleOf`.
fn rule_violations<T: Offset>(
    rules: &NumberRules<T>,
    constant_description: impl Fn(String) -> String,
) -> Vec<InvalidValue> {
    let mut invalid = Vec::new();

    if let Some(constant) = rules.constant {
        invalid.push(InvalidValue::new(
            constant.above(),
            constant_description(constant.describe()),
        ));
    }
    if let Some(step) = rules.step() {
        invalid.push(InvalidValue::new(
            step.above(),
            format!("not a multiple of {}", step.describe()),
        ));
    }
    if let Some(gt) = rules.gt {
        invalid.push(InvalidValue::new(gt, format!("not greater than {}", gt.describe())));
    }
    if let Some(lt) = rules.lt {
        invalid.push(InvalidValue::new(lt, format!("not less than {}", lt.describe())));
    }
    if let Some(gte) = rules.gte {
        invalid.push(InvalidValue::new(gte.below(), format!("less than {}", gte.describe())));
    }
    if let Some(lte) = rules.lte {
        invalid.push(InvalidValue::new(lte.above(), format!("greater than {}", lte.describe())));
    }

    invalid
}

/// Generate values that each break one decimal rule, followed by a string and
/// a boolean.
pub fn invalid_decimal(rng: &mut Lcg, rules: &DecimalRules) -> Vec<InvalidValue> {
    let mut invalid = rule_violations(rules, |constant| format!("not {constant}"));

    invalid.push(InvalidValue::new(string_of_length(rng, 10), "a string"));
    invalid.push(InvalidValue::new(
        valid_boolean(rng, &BooleanRules::default()),
        "a boolean",
    ));

    invalid
}

/// Generate values that each break one integer rule, followed by a string, a
/// decimal (unless `multipleOf` is set) and a boolean.
///
/// Fails only if the decimal cannot be drawn within the rules' bounds.
pub fn invalid_integer(
    rng: &mut Lcg,
    rules: &IntegerRules,
) -> Result<Vec<InvalidValue>, GeneratorError> {
    let mut invalid = rule_violations(rules, |constant| format!("does not equal {constant}"));

    invalid.push(InvalidValue::new(string_of_length(rng, 10), "a string"));

    if rules.multiple_of.is_none() {
        invalid.push(InvalidValue::new(
            valid_decimal(rng, &rules.to_decimal_rules())?,
            "a decimal",
        ));
    }

    invalid.push(InvalidValue::new(
        valid_boolean(rng, &BooleanRules::default()),
        "a boolean",
    ));

    Ok(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(invalid: &[InvalidValue]) -> Vec<&str> {
        invalid.iter().map(|v| v.description.as_str()).collect()
    }

    #[test]
    fn test_valid_integer_inclusive_range() {
        let mut rng = Lcg::new(1234567);
        let rules = IntegerRules::inclusive(0, 10);

        for _ in 0..1000 {
            let value = valid_integer(&mut rng, &rules).unwrap();
            assert!((0..=10).contains(&value));
        }
    }

    #[test]
    fn test_valid_integer_multiple_of() {
        let mut rng = Lcg::new(42);
        let rules = IntegerRules::inclusive(-50, 50).with_multiple_of(7);

        for _ in 0..1000 {
            let value = valid_integer(&mut rng, &rules).unwrap();
            assert!((-50..=50).contains(&value));
            assert_eq!(value % 7, 0);
        }
    }

    #[test]
    fn test_valid_integer_defaults_within_scaled_safe_range() {
        let mut rng = Lcg::new(11);

        for _ in 0..100 {
            let value = valid_integer(&mut rng, &IntegerRules::default()).unwrap();
            assert!((value as f64).abs() <= DEFAULT_UPPER + 1.0);
        }
    }

    #[test]
    fn test_valid_integer_inverted_bounds() {
        let mut rng = Lcg::new(1);
        let rules = IntegerRules::inclusive(10, 0);

        let result = valid_integer(&mut rng, &rules);
        assert!(matches!(
            result,
            Err(GeneratorError::BoundsInverted { lower, upper }) if lower == 10.0 && upper == 0.0
        ));
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn test_valid_integer_no_multiple_in_range() {
        let mut rng = Lcg::new(1);
        let rules = IntegerRules::inclusive(1, 4).with_multiple_of(10);

        let result = valid_integer(&mut rng, &rules);
        assert!(matches!(result, Err(GeneratorError::IntegerOutOfBounds { .. })));
    }

    #[test]
    fn test_valid_integer_constant() {
        let mut rng = Lcg::new(1);
        let rules = IntegerRules {
            constant: Some(0),
            ..IntegerRules::default()
        };

        assert_eq!(valid_integer(&mut rng, &rules).unwrap(), 0);
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn test_strict_bounds_merge_with_inclusive() {
        // gt/lt behave like gte/lte when sampling.
        let mut rng = Lcg::new(2);
        let rules = IntegerRules::exclusive(5, 5);

        assert_eq!(valid_integer(&mut rng, &rules).unwrap(), 5);
    }

    #[test]
    fn test_valid_decimal_range() {
        let mut rng = Lcg::new(1234567);
        let rules = DecimalRules::exclusive(-1.5, 2.5);

        for _ in 0..1000 {
            let value = valid_decimal(&mut rng, &rules).unwrap();
            assert!((-1.5..=2.5).contains(&value));
        }
    }

    #[test]
    fn test_valid_decimal_multiple_of() {
        let mut rng = Lcg::new(77);
        let rules = DecimalRules::inclusive(0.0, 10.0).with_multiple_of(0.5);

        for _ in 0..1000 {
            let value = valid_decimal(&mut rng, &rules).unwrap();
            assert!((0.0..=10.0).contains(&value));
            let quotient = value / 0.5;
            assert!((quotient - quotient.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_valid_decimal_multiple_leaves_bounds() {
        let mut rng = Lcg::new(3);
        let rules = DecimalRules::inclusive(0.1, 0.2).with_multiple_of(1.0);

        let result = valid_decimal(&mut rng, &rules);
        assert!(matches!(result, Err(GeneratorError::MultipleOutOfBounds { .. })));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(1.2), 1.0);
    }

    #[test]
    fn test_invalid_integer_inclusive_bounds() {
        let mut rng = Lcg::new(1234567);
        let invalid = invalid_integer(&mut rng, &IntegerRules::inclusive(0, 10)).unwrap();

        assert_eq!(
            descriptions(&invalid),
            vec![
                "less than 0",
                "greater than 10",
                "a string",
                "a decimal",
                "a boolean"
            ]
        );
        assert_eq!(invalid[0].value, FixtureValue::Integer(-1));
        assert_eq!(invalid[1].value, FixtureValue::Integer(11));
        assert_eq!(invalid[2].value.as_str().map(str::len), Some(10));

        let decimal = invalid[3].value.as_f64().unwrap();
        assert!((0.0..=10.0).contains(&decimal));
    }

    #[test]
    fn test_invalid_integer_all_rules() {
        let mut rng = Lcg::new(9);
        let rules = IntegerRules {
            multiple_of: Some(5),
            gt: Some(0),
            lt: Some(100),
            gte: Some(5),
            lte: Some(95),
            constant: Some(50),
        };
        let invalid = invalid_integer(&mut rng, &rules).unwrap();

        let expected = vec![
            (FixtureValue::Integer(51), "does not equal 50"),
            (FixtureValue::Integer(6), "not a multiple of 5"),
            (FixtureValue::Integer(0), "not greater than 0"),
            (FixtureValue::Integer(100), "not less than 100"),
            (FixtureValue::Integer(4), "less than 5"),
            (FixtureValue::Integer(96), "greater than 95"),
        ];
        for (record, (value, description)) in invalid.iter().zip(&expected) {
            assert_eq!(&record.value, value);
            assert_eq!(record.description, *description);
        }

        // multipleOf suppresses the decimal record
        assert_eq!(
            descriptions(&invalid[expected.len()..]),
            vec!["a string", "a boolean"]
        );
    }

    #[test]
    fn test_invalid_integer_inverted_bounds_fails_on_decimal() {
        let mut rng = Lcg::new(9);
        let result = invalid_integer(&mut rng, &IntegerRules::inclusive(3, 1));

        assert!(matches!(result, Err(GeneratorError::BoundsInverted { .. })));
    }

    #[test]
    fn test_invalid_decimal_records() {
        let mut rng = Lcg::new(4);
        let rules = DecimalRules {
            constant: Some(1.5),
            multiple_of: Some(0.25),
            lte: Some(2.0),
            ..DecimalRules::default()
        };
        let invalid = invalid_decimal(&mut rng, &rules);

        assert_eq!(
            descriptions(&invalid),
            vec![
                "not 1.5",
                "not a multiple of 0.25",
                "greater than 2",
                "a string",
                "a boolean"
            ]
        );
        assert_eq!(invalid[0].value, FixtureValue::Decimal(1.5 + 0.1));
        assert_eq!(invalid[1].value, FixtureValue::Decimal(0.25 + 0.1));
        assert_eq!(invalid[2].value, FixtureValue::Decimal(2.0 + 0.1));
    }

    #[test]
    fn test_invalid_decimal_zero_multiple_of_is_absent() {
        let mut rng = Lcg::new(4);
        let rules = DecimalRules::default().with_multiple_of(0.0);

        assert_eq!(
            descriptions(&invalid_decimal(&mut rng, &rules)),
            vec!["a string", "a boolean"]
        );
    }

    #[test]
    fn test_format_decimal_matches_js_number_text() {
        assert_eq!(format_decimal(0.25), "0.25");
        assert_eq!(format_decimal(2.0), "2");
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(0.000001), "0.000001");
        assert_eq!(format_decimal(1e-7), "1e-7");
        assert_eq!(format_decimal(-2.5e-8), "-2.5e-8");
        assert_eq!(format_decimal(1e20), "100000000000000000000");
        assert_eq!(format_decimal(1e21), "1e+21");
        assert_eq!(format_decimal(1.5e300), "1.5e+300");
        assert_eq!(format_decimal(f64::INFINITY), "Infinity");
        assert_eq!(format_decimal(f64::NAN), "NaN");
    }

    #[test]
    fn test_invalid_decimal_extreme_bound_descriptions() {
        let mut rng = Lcg::new(4);
        let rules = DecimalRules {
            multiple_of: Some(1e-7),
            lte: Some(1e21),
            ..DecimalRules::default()
        };
        let invalid = invalid_decimal(&mut rng, &rules);

        assert_eq!(
            descriptions(&invalid[..2]),
            vec!["not a multiple of 1e-7", "greater than 1e+21"]
        );
    }
}
