mod constants;
pub use constants::{
    DEFAULT_REPORT_CONFIG, DEMO_SENTENCE, DEMO_TARGET_CHARS, SENTENCE_PROMPT,
    TARGET_CHARS_PROMPT, TOTAL_FREQUENCY_LABEL,
};
pub mod models;
pub use models::{Error, ReportConfig, SentenceParser, WordUnit};
pub mod types;
mod utils;
pub use types::{Frequency, MatchCount, ReportLine, TargetChar, UnitFrequencyMap, WordLength};
pub use utils::{format_frequency, normalize_phrase, prompt_non_empty_line};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Parses `sentence` with the characters of `target_chars` and returns the
/// frequency report: one line per word shape followed by the total frequency.
///
/// # Errors
/// Returns `Error::InvalidArgument` if either input is empty or the sentence has
/// no letters or digits.
pub fn analyze_sentence(sentence: &str, target_chars: &str) -> Result<Vec<ReportLine>, Error> {
    let report_lines =
        analyze_sentence_with_custom_config(DEFAULT_REPORT_CONFIG, sentence, target_chars)?;

    Ok(report_lines)
}

pub fn analyze_sentence_with_custom_config(
    report_config: &ReportConfig,
    sentence: &str,
    target_chars: &str,
) -> Result<Vec<ReportLine>, Error> {
    let sentence_parser = SentenceParser::new(sentence, target_chars)?;

    sentence_parser.report_lines_with_config(report_config)
}
