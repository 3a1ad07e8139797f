//! Linear congruential generator driving every draw.
//!
//! `state = (1664525 * state + 1013904223) mod 2^32`, output `state / 2^32`.
//! The state is a wrapping `u32`, so the full sequence is reproducible from
//! the seed alone.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Seeded LCG state.
///
/// Only the samplers in this crate draw from it; callers interact through
/// [`crate::FixtureGenerator`] or the functions in [`crate::generators`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator whose first draw advances from `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state register.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state and return a float in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }

    /// Draw an integer uniformly from `[min, max]` as
    /// `floor(next * (max - min + 1)) + min`.
    ///
    /// Always consumes exactly one draw. When `max < min` the result follows
    /// the same formula and may fall below `min`; callers clamp as needed.
    /// The span is computed in `f64` and the offset saturates, so extreme
    /// bounds never overflow.
    pub(crate) fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        let span = max as f64 - min as f64 + 1.0;
        ((self.next_f64() * span).floor() as i64).saturating_add(min)
    }

    /// Draw an index into a collection of `len` elements.
    pub(crate) fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }
}
