use serde::{Deserialize, Serialize};

/// Verdict level for a scanned URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskLevel {
    /// Classify an accumulated score into a level.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 60 => RiskLevel::Dangerous,
            s if s >= 20 => RiskLevel::Suspicious,
            _ => RiskLevel::Safe,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "✅",
            RiskLevel::Suspicious => "⚠️",
            RiskLevel::Dangerous => "🚫",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Suspicious => "SUSPICIOUS",
            RiskLevel::Dangerous => "DANGEROUS",
        }
    }
}

/// Result of scanning a single URL.
///
/// Immutable once produced; the score is the sum of all triggered signal
/// weights and `text` is the assembled human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    pub level: RiskLevel,
    pub score: i32,
    pub text: String,
}
