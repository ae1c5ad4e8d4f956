use crate::types::{Frequency, MatchCount, TargetChar, WordLength};
use crate::Error;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The analysis of a single word against a set of target characters.
///
/// A `WordUnit` records which of the target characters appear in the word
/// (in the order the target characters were given) and how many times target
/// characters occur in the word overall.
///
/// Two units are considered equal when their words have the same length and
/// contain the same set of target characters. The word content itself does not
/// take part in equality or hashing, so "level" and "plate" analyzed against `l`
/// are the same unit.
#[derive(Debug, Clone)]
pub struct WordUnit {
    word: String,
    target_chars: Vec<TargetChar>,
    contained_chars: Vec<TargetChar>,
    match_count: MatchCount,
}

impl WordUnit {
    /// Analyzes `word` against the characters of `target_chars`.
    ///
    /// Both inputs are lowercased before analysis.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `word` or `target_chars` is empty.
    pub fn new(word: &str, target_chars: &str) -> Result<Self, Error> {
        if word.is_empty() || target_chars.is_empty() {
            return Err(Error::InvalidArgument(
                "Given word and characters can't be empty!".to_string(),
            ));
        }

        let word = word.to_lowercase();
        let target_chars: Vec<TargetChar> = target_chars.to_lowercase().chars().collect();

        let target_set: HashSet<TargetChar> = target_chars.iter().copied().collect();

        let mut seen_chars = HashSet::new();
        let mut match_count = 0;
        for c in word.chars() {
            if target_set.contains(&c) {
                seen_chars.insert(c);
                match_count += 1;
            }
        }

        // Display order follows the target characters, not discovery order
        let mut contained_chars = Vec::with_capacity(seen_chars.len());
        for c in &target_chars {
            if seen_chars.contains(c) && !contained_chars.contains(c) {
                contained_chars.push(*c);
            }
        }

        Ok(WordUnit {
            word,
            target_chars,
            contained_chars,
            match_count,
        })
    }

    /// Analyzes `word` against a slice of target characters.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `word` or `target_chars` is empty.
    pub fn from_chars(word: &str, target_chars: &[TargetChar]) -> Result<Self, Error> {
        let target_chars: String = target_chars.iter().collect();

        WordUnit::new(word, &target_chars)
    }

    /// The analyzed word, lowercased.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The target characters the word was analyzed against, lowercased.
    pub fn target_chars(&self) -> &[TargetChar] {
        &self.target_chars
    }

    /// Returns the length of the word in characters.
    pub fn size(&self) -> WordLength {
        self.word.chars().count()
    }

    /// Returns the target characters found in the word, in target order.
    pub fn contained_chars(&self) -> &[TargetChar] {
        &self.contained_chars
    }

    /// Returns the number of target-character occurrences in the word, including
    /// any counts absorbed from merged units.
    pub fn match_count(&self) -> MatchCount {
        self.match_count
    }

    /// Calculates this unit's share of `total_match_count`.
    ///
    /// # Arguments
    /// * `total_match_count` - The number of target-character occurrences in the
    ///   whole sentence.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `total_match_count` is 0.
    pub fn frequency(&self, total_match_count: MatchCount) -> Result<Frequency, Error> {
        if total_match_count == 0 {
            return Err(Error::InvalidArgument(
                "Total number of characters has to be more than 0".to_string(),
            ));
        }

        Ok(self.match_count as Frequency / total_match_count as Frequency)
    }

    /// Adds the count of a merged unit to this one.
    pub(crate) fn absorb(&mut self, match_count: MatchCount) {
        self.match_count += match_count;
    }

    /// Renders the contained characters as a bracketed set, e.g. `[t, e, s]`.
    ///
    /// Used as the tertiary sort key.
    pub(crate) fn contained_chars_key(&self) -> String {
        format!("[{}]", self.joined_contained_chars())
    }

    fn joined_contained_chars(&self) -> String {
        self.contained_chars
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn contained_char_set(&self) -> BTreeSet<TargetChar> {
        self.contained_chars.iter().copied().collect()
    }
}

impl fmt::Display for WordUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}), {}", self.joined_contained_chars(), self.size())
    }
}

impl PartialEq for WordUnit {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.contained_char_set() == other.contained_char_set()
    }
}

impl Eq for WordUnit {}

impl Hash for WordUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.contained_char_set().hash(state);
        self.size().hash(state);
    }
}
