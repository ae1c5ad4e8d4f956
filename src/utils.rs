pub mod format_frequency;
pub mod merge_equal_units;
pub mod normalize_phrase;
pub mod prompt_non_empty_line;
pub mod read_two_line_source;
pub mod sort_units;
pub mod split_words;

pub use format_frequency::format_frequency;
pub use merge_equal_units::merge_equal_units;
pub use normalize_phrase::{count_non_whitespace_chars, is_phrase_whitespace, normalize_phrase};
pub use prompt_non_empty_line::prompt_non_empty_line;
pub use read_two_line_source::read_two_line_source;
pub use sort_units::sort_units;
pub use split_words::split_words;
