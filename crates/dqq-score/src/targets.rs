//! Percentage-against-target helper for the food-pyramid visualizations.

use serde::{Deserialize, Serialize};

/// A recommended intake range for one pyramid tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
}

impl TargetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Map a consumed amount onto a percentage of the target range.
///
/// Anywhere inside `[min, max]` reads as exactly 100%. Above the range the
/// overshoot scales linearly relative to `max` (with multiplier 1, twice the
/// maximum reads as 200%); below the range the shortfall scales linearly
/// relative to `min` (with multiplier 1, zero intake against a positive
/// minimum reads as 0%). The three-branch policy is what gives "100%" a
/// consistent meaning across every pyramid tier, so consumers must not
/// approximate it.
pub fn percent_of_target(
    consumed: f64,
    range: TargetRange,
    above_multiplier: f64,
    below_multiplier: f64,
) -> f64 {
    if consumed > range.max {
        100.0 + (consumed - range.max) / range.max * 100.0 * above_multiplier
    } else if consumed < range.min {
        100.0 - (range.min - consumed) / range.min * 100.0 * below_multiplier
    } else {
        100.0
    }
}
