/// Tunables for rendering a frequency report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of decimal places used for every frequency in the report.
    pub decimal_places: usize,

    /// Whether the trailing `Total Frequency: ...` line is emitted.
    pub include_summary: bool,
}
