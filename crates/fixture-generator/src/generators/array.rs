//! Array length and item collection.
//!
//! Item values come from a caller-supplied producer that draws from the same
//! session, so the array entry points live on
//! [`FixtureGenerator`](crate::FixtureGenerator); this module holds the
//! length draw and the collection loop they share.

use crate::generator::GeneratorError;
use crate::generators::string::length_to_i64;
use crate::lcg::Lcg;
use fixture_core::ArrayRules;

/// Draws allowed per requested item when collecting unique items.
pub const UNIQUE_ATTEMPTS_PER_ITEM: usize = 5;

/// Draw the target length for an array.
///
/// `minItems` defaults to 1 and `maxItems` to `minItems`.
pub fn array_length(rng: &mut Lcg, rules: &ArrayRules) -> usize {
    let min_items = rules.min_items.unwrap_or(1);
    let max_items = rules.max_items.unwrap_or(min_items);

    rng.next_in_range(length_to_i64(min_items), length_to_i64(max_items))
        .max(0) as usize
}

/// Collect `length` items from `draw`, in draw order.
///
/// With `unique`, duplicates are discarded and drawing continues until
/// `length` distinct items are held. More than `length * 5` draws fails with
/// [`GeneratorError::UniqueItemsExhausted`].
pub fn collect_items<T, F>(
    length: usize,
    unique: bool,
    mut draw: F,
) -> Result<Vec<T>, GeneratorError>
where
    T: PartialEq,
    F: FnMut() -> Result<T, GeneratorError>,
{
    let mut items = Vec::with_capacity(length);

    if !unique {
        for _ in 0..length {
            items.push(draw()?);
        }
        return Ok(items);
    }

    let max_attempts = length.saturating_mul(UNIQUE_ATTEMPTS_PER_ITEM);
    let mut attempts = 0;
    while items.len() < length {
        if attempts == max_attempts {
            return Err(GeneratorError::UniqueItemsExhausted {
                target: length,
                found: items.len(),
                attempts,
            });
        }
        attempts += 1;

        let item = draw()?;
        if !items.contains(&item) {
            items.push(item);
        }
    }

    Ok(items)
}
