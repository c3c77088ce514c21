use crate::report::RiskReport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The most recent scan, kept for later display. The scanner never
/// touches this; the CLI writes it after a scan and reads it back for
/// the `--last` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub url: String,
    pub report: RiskReport,
}

impl ScanRecord {
    pub fn new(url: &str, report: RiskReport) -> Self {
        Self {
            url: url.to_string(),
            report,
        }
    }

    /// Read the last-scan slot. A missing file is not an error, just an
    /// empty history.
    pub fn load(path: &str) -> anyhow::Result<Option<Self>> {
        if !Path::new(path).exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let record: ScanRecord = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    /// Overwrite the last-scan slot, creating the parent directory if
    /// needed.
    pub fn store(&self, path: &str) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
