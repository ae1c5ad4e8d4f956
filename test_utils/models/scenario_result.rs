use crate::models::Scenario;

/// Compares what a parser produced against a scenario's expectations.
pub struct ScenarioResult {
    pub actual_units: Vec<String>,
    pub missing_units: Vec<String>,
    pub unexpected_units: Vec<String>,
    pub actual_total_match_count: usize,
}

impl ScenarioResult {
    pub fn new(
        scenario: &Scenario,
        actual_units: Vec<String>,
        actual_total_match_count: usize,
    ) -> Self {
        let missing_units = scenario
            .expected_units
            .iter()
            .filter(|unit| !actual_units.contains(unit))
            .cloned()
            .collect();

        let unexpected_units = actual_units
            .iter()
            .filter(|unit| !scenario.expected_units.contains(unit))
            .cloned()
            .collect();

        ScenarioResult {
            actual_units,
            missing_units,
            unexpected_units,
            actual_total_match_count,
        }
    }

    /// Counts every discrepancy: missing or unexpected units, a different order,
    /// and a different total match count.
    pub fn error_count(&self, scenario: &Scenario) -> usize {
        let mut error_count = self.missing_units.len() + self.unexpected_units.len();

        if self.missing_units.is_empty()
            && self.unexpected_units.is_empty()
            && self.actual_units != scenario.expected_units
        {
            error_count += 1;
        }

        if self.actual_total_match_count != scenario.expected_total_match_count {
            error_count += 1;
        }

        error_count
    }
}
