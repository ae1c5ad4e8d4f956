/// A sentence, its target characters, and what parsing them should produce.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub sentence: String,
    pub target_chars: String,
    /// The rendered units, in order (e.g. `(t, e, s), 4`).
    pub expected_units: Vec<String>,
    pub expected_total_match_count: usize,
}
