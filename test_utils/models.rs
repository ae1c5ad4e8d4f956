pub mod scenario;
pub use scenario::Scenario;

pub mod scenario_result;
pub use scenario_result::ScenarioResult;
