use test_utils::constants::SCENARIO_CSV_FILE_PATH;
use test_utils::{load_scenarios_from_file, run_scenario};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_scenarios_from_csv() {
        let scenarios = load_scenarios_from_file(&*SCENARIO_CSV_FILE_PATH)
            .expect("Failed to load scenarios from CSV");

        assert!(!scenarios.is_empty());

        let total_scenarios = scenarios.len();
        for (scenario_idx, scenario) in scenarios.iter().enumerate() {
            println!(
                "   -- {:?} / {:?} ({} of {})",
                scenario.sentence,
                scenario.target_chars,
                scenario_idx + 1,
                total_scenarios
            );

            let scenario_result = run_scenario(scenario, true);
            assert_eq!(scenario_result.error_count(scenario), 0);
        }
    }
}
