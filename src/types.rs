use crate::models::WordUnit;
use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A single character of the caller-supplied target set.
pub type TargetChar = char;

/// The number of target-character occurrences counted within a word (or within a
/// group of merged words).
pub type MatchCount = usize;

/// The length of a word, in characters.
pub type WordLength = usize;

/// A ratio in the range `[0, 1]`, e.g. a unit's share of all matched characters.
pub type Frequency = f64;

/// A single formatted line of a frequency report.
pub type ReportLine = String;

/// Maps each word unit to its frequency relative to the sentence's total match count.
///
/// Keys compare by word shape (contained characters + word length), not by word content.
pub type UnitFrequencyMap = HashMap<WordUnit, Frequency>;
