//! Scenario and board export
//!
//! Serializes scenario results together with the final board summary to
//! JSON for external consumption.

use crate::scenarios::ScenarioResult;
use serde::{Deserialize, Serialize};
use types::fixture::Match;

/// Combined export containing all simulation outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub results: Vec<ScenarioResult>,
    /// Ranked summary of the board at export time
    pub summary: Vec<Match>,
}

impl SimulationExport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Build a complete simulation export.
pub fn build_export(results: &[ScenarioResult], summary: Vec<Match>) -> SimulationExport {
    SimulationExport {
        version: crate::VERSION.to_string(),
        results: results.to_vec(),
        summary,
    }
}

/// Export complete simulation data as JSON.
pub fn export_json(export: &SimulationExport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(export)
}

/// Write export to a file path.
pub fn write_to_file(export: &SimulationExport, path: &str) -> std::io::Result<()> {
    let json = export_json(export)?;
    std::fs::write(path, json)
}
