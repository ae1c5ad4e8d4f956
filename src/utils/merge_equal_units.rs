use crate::models::WordUnit;
use log::debug;

/// Collapses equal word units into one, summing their match counts.
///
/// Each unit is compared against the units kept so far; when an equal one
/// exists, the unit is dropped and its count is absorbed into the kept unit.
/// Kept units retain their original relative order, so on a sorted list this
/// behaves like merging neighbours left to right.
///
/// # Arguments
/// * `units` - The units to merge, typically already sorted.
///
/// # Returns
/// A new vector with exactly one unit per word shape.
pub fn merge_equal_units(units: Vec<WordUnit>) -> Vec<WordUnit> {
    let mut merged: Vec<WordUnit> = Vec::with_capacity(units.len());

    for unit in units {
        match merged.iter_mut().find(|kept| **kept == unit) {
            Some(kept) => {
                debug!("Merging {} into {}", unit.word(), kept.word());
                kept.absorb(unit.match_count());
            }
            None => merged.push(unit),
        }
    }

    merged
}
