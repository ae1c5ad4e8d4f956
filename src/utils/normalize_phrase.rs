/// Returns `true` for the whitespace characters that separate words in a phrase:
/// space, tab, line feed, vertical tab, form feed and carriage return.
pub fn is_phrase_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Strips every character that is not an ASCII letter, an ASCII digit or
/// whitespace from the given phrase.
///
/// Whitespace is kept as-is so that word boundaries survive normalization.
///
/// # Example
/// ```
/// use char_frequency::normalize_phrase;
///
/// assert_eq!(normalize_phrase("I love to work, don't I?"), "I love to work dont I");
/// ```
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_phrase_whitespace(c))
        .collect()
}

/// Counts the characters of `phrase` once all whitespace is removed.
pub fn count_non_whitespace_chars(phrase: &str) -> usize {
    phrase.chars().filter(|&c| !is_phrase_whitespace(c)).count()
}
