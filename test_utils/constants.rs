use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static SCENARIO_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("scenarios.csv"));

/// Separates the expected unit strings within a single CSV field.
pub static EXPECTED_UNIT_SEPARATOR: char = '|';
