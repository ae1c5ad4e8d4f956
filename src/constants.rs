use crate::models::ReportConfig;

pub const DEFAULT_REPORT_CONFIG: &ReportConfig = &ReportConfig {
    decimal_places: 2,
    include_summary: true,
};

pub const TOTAL_FREQUENCY_LABEL: &str = "Total Frequency";

pub const SENTENCE_PROMPT: &str =
    "Insert a sentence for which you would like to know the frequencies of the characters: ";

pub const TARGET_CHARS_PROMPT: &str = "Insert a set of characters: ";

pub const DEMO_SENTENCE: &str = "I love to work in global logic!";

pub const DEMO_TARGET_CHARS: &str = "LOGIC";
