//! Fixture generator session handle.

use crate::generators::{array, boolean, numeric, string};
use crate::lcg::Lcg;
use fixture_core::{
    ArrayRules, BooleanRules, DecimalRules, IntegerRules, InvalidValue, StringRules,
};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The rules' lower bound exceeds their upper bound
    #[error("The provided lower bound {lower} is greater than the upper bound {upper}")]
    BoundsInverted { lower: f64, upper: f64 },

    /// Rounding a decimal to `multipleOf` left the bounds
    #[error(
        "Unable to generate a valid number within the provided constraints \
         ({value} is outside [{lower}, {upper}])"
    )]
    MultipleOutOfBounds { value: f64, lower: f64, upper: f64 },

    /// Adjusting an integer to `multipleOf` left the bounds
    #[error(
        "Unable to generate a valid integer within the provided constraints \
         ({value} is outside [{lower}, {upper}])"
    )]
    IntegerOutOfBounds { value: f64, lower: f64, upper: f64 },

    /// Unique item generation ran out of attempts
    #[error(
        "Unable to generate a valid array within the provided constraints \
         ({found} of {target} unique items after {attempts} attempts)"
    )]
    UniqueItemsExhausted {
        target: usize,
        found: usize,
        attempts: usize,
    },

    /// Generation failed for a plan field
    #[error("Failed to generate fixtures for field '{field}'")]
    Field {
        field: String,
        #[source]
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Whether this is a bound error from a numeric rule set.
    pub fn is_range_error(&self) -> bool {
        match self {
            Self::BoundsInverted { .. }
            | Self::MultipleOutOfBounds { .. }
            | Self::IntegerOutOfBounds { .. } => true,
            Self::UniqueItemsExhausted { .. } => false,
            Self::Field { source, .. } => source.is_range_error(),
        }
    }

    /// Whether unique-item generation gave up.
    pub fn is_exhausted(&self) -> bool {
        match self {
            Self::UniqueItemsExhausted { .. } => true,
            Self::Field { source, .. } => source.is_exhausted(),
            _ => false,
        }
    }
}

/// Generator that produces deterministic valid and invalid fixture values.
///
/// Every call advances one shared LCG, so the values produced are a pure
/// function of the seed, the order of calls and the rules passed to each
/// call. Hold one generator per output artifact and keep the call order
/// stable to reproduce a run.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    /// Seed the generator was created with
    seed: u32,
    /// LCG state, advanced by every draw
    rng: Lcg,
}

impl FixtureGenerator {
    /// Invalid-array generation is an inert placeholder; see [`Self::invalid_array`].
    pub const SUPPORTS_INVALID_ARRAYS: bool = false;

    /// Create a new generator with the given seed.
    pub fn new(seed: u32) -> Self {
        tracing::debug!(seed, "Seeding fixture generator");
        Self {
            seed,
            rng: Lcg::new(seed),
        }
    }

    /// Create a generator with a process-random seed in `[0, 65536)`.
    ///
    /// Runs seeded this way are not reproducible unless [`Self::seed`] is recorded.
    pub fn from_entropy() -> Self {
        Self::new(u32::from(rand::random::<u16>()))
    }

    /// Get the seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Get the current LCG state.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }

    /// Generate a string satisfying the length and constant rules.
    pub fn valid_string(&mut self, rules: &StringRules) -> String {
        string::valid_string(&mut self.rng, rules)
    }

    /// Generate one string per violated rule, then a number and a boolean.
    pub fn invalid_string(&mut self, rules: &StringRules) -> Vec<InvalidValue> {
        string::invalid_string(&mut self.rng, rules)
    }

    /// Generate an integer within the bounds, honoring `multipleOf`.
    ///
    /// Fails with a range error when no such integer can be drawn.
    pub fn valid_integer(&mut self, rules: &IntegerRules) -> Result<i64, GeneratorError> {
        numeric::valid_integer(&mut self.rng, rules)
    }

    /// Generate one integer per violated rule, then a string, a decimal
    /// (unless `multipleOf` is set) and a boolean.
    pub fn invalid_integer(
        &mut self,
        rules: &IntegerRules,
    ) -> Result<Vec<InvalidValue>, GeneratorError> {
        numeric::invalid_integer(&mut self.rng, rules)
    }

    /// Generate a decimal within the bounds, rounded to `multipleOf` if set.
    pub fn valid_decimal(&mut self, rules: &DecimalRules) -> Result<f64, GeneratorError> {
        numeric::valid_decimal(&mut self.rng, rules)
    }

    /// Generate one decimal per violated rule, then a string and a boolean.
    pub fn invalid_decimal(&mut self, rules: &DecimalRules) -> Vec<InvalidValue> {
        numeric::invalid_decimal(&mut self.rng, rules)
    }

    /// Generate a boolean, or the constant if one is set.
    pub fn valid_boolean(&mut self, rules: &BooleanRules) -> bool {
        boolean::valid_boolean(&mut self.rng, rules)
    }

    /// Generate the negated constant (if set), then a string and a number.
    pub fn invalid_boolean(&mut self, rules: &BooleanRules) -> Vec<InvalidValue> {
        boolean::invalid_boolean(&mut self.rng, rules)
    }

    /// Generate an array whose items come from `item`.
    ///
    /// The producer receives this generator, so item draws interleave with
    /// the length draw in one sequence. `uniqueItems` compares items with
    /// `PartialEq`.
    pub fn valid_array<T, F>(
        &mut self,
        rules: &ArrayRules,
        mut item: F,
    ) -> Result<Vec<T>, GeneratorError>
    where
        T: PartialEq,
        F: FnMut(&mut Self) -> Result<T, GeneratorError>,
    {
        let length = array::array_length(&mut self.rng, rules);
        array::collect_items(length, rules.unique_items.unwrap_or(false), || {
            item(&mut *self)
        })
    }

    /// Invalid arrays are not generated.
    ///
    /// Takes the valid-item and invalid-item producers a real implementation
    /// would need, never calls them and returns an empty list. Check
    /// [`Self::SUPPORTS_INVALID_ARRAYS`] before relying on array-level
    /// negative fixtures.
    pub fn invalid_array<T, V, I>(
        &self,
        _valid_item: V,
        _invalid_item: I,
        _rules: &ArrayRules,
    ) -> Vec<InvalidValue>
    where
        V: FnMut(&mut Self) -> Result<T, GeneratorError>,
        I: FnMut(&mut Self) -> Result<Vec<InvalidValue>, GeneratorError>,
    {
        Vec::new()
    }
}
