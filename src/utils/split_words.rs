use crate::utils::is_phrase_whitespace;

/// Splits a normalized phrase into words on runs of whitespace.
///
/// Leading and trailing whitespace never produce empty words.
pub fn split_words(phrase: &str) -> Vec<&str> {
    phrase
        .split(is_phrase_whitespace)
        .filter(|word| !word.is_empty())
        .collect()
}
