pub mod error;
pub use error::Error;

pub mod report_config;
pub use report_config::ReportConfig;

pub mod sentence_parser;
pub use sentence_parser::SentenceParser;

pub mod word_unit;
pub use word_unit::WordUnit;
