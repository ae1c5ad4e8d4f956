pub mod constants;
pub mod models;

use char_frequency::SentenceParser;
use csv::Reader;
use models::{Scenario, ScenarioResult};
use std::error::Error;
use std::path::Path;

use constants::EXPECTED_UNIT_SEPARATOR;

/// Utility to load parsing scenarios from a CSV file for testing and benchmarking.
///
/// Expected columns: `sentence`, `characters`, `expected_units` (separated by
/// `|`, empty for none) and `expected_total_match_count`.
pub fn load_scenarios_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut scenarios = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        let expected_units = record[2]
            .split(EXPECTED_UNIT_SEPARATOR)
            .filter(|unit| !unit.is_empty())
            .map(|unit| unit.to_string())
            .collect();

        scenarios.push(Scenario {
            sentence: record[0].to_string(),
            target_chars: record[1].to_string(),
            expected_units,
            expected_total_match_count: record[3].trim().parse()?,
        });
    }

    Ok(scenarios)
}

/// Counts target-character occurrences word by word, without going through
/// `WordUnit`, as an independent reference for the parser's totals.
pub fn brute_force_match_count(sentence: &str, target_chars: &str) -> usize {
    let target_chars = target_chars.to_lowercase();

    sentence
        .split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() && target_chars.contains(*c))
                .count()
        })
        .sum()
}

/// Parses a scenario and compares the outcome with its expectations.
pub fn run_scenario(scenario: &Scenario, use_assertions: bool) -> ScenarioResult {
    let sentence_parser = SentenceParser::new(&scenario.sentence, &scenario.target_chars)
        .expect("Failed to parse scenario");

    let actual_units: Vec<String> = sentence_parser
        .all_units()
        .iter()
        .map(|unit| unit.to_string())
        .collect();

    let scenario_result =
        ScenarioResult::new(scenario, actual_units, sentence_parser.total_match_count());

    if use_assertions {
        assert_eq!(
            scenario_result.actual_units, scenario.expected_units,
            "{:?} / {:?} - unexpected units",
            scenario.sentence, scenario.target_chars
        );
        assert_eq!(
            scenario_result.actual_total_match_count, scenario.expected_total_match_count,
            "{:?} / {:?} - unexpected total match count",
            scenario.sentence, scenario.target_chars
        );
    }

    scenario_result
}
