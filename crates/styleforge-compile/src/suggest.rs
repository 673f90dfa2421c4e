//! Closest-valid-alternative ranking for developer-facing errors.

use std::collections::BTreeMap;

use serde_json::Value;
use styleforge_core::{coerce, ComponentSchema};

use crate::combinations::{valid_combinations, Combination};

/// How many alternatives a suggestion carries at most.
pub const MAX_SUGGESTIONS: usize = 3;

/// Rank the valid combinations of a schema by similarity to an invalid prop
/// set and return the closest ones.
///
/// The score of a combination is the number of its `(property, value)` pairs
/// whose value exactly matches the stringified entry in `invalid_props`.
/// The sort is stable and descending, so ties keep generator order. Never
/// fails: a schema with no valid combinations yields an empty list.
pub fn suggest_alternatives(
    schema: &ComponentSchema,
    invalid_props: &BTreeMap<String, Value>,
) -> Vec<Combination> {
    let mut scored: Vec<(usize, Combination)> = valid_combinations(schema)
        .into_iter()
        .map(|combo| (similarity(&combo, invalid_props), combo))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, combo)| combo)
        .collect()
}

fn similarity(combination: &Combination, props: &BTreeMap<String, Value>) -> usize {
    combination
        .iter()
        .filter(|(name, value)| props.get(*name).map(coerce).as_deref() == Some(value.as_str()))
        .count()
}
