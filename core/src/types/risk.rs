use serde::{Deserialize, Serialize};

/// Ordinal severity scale shared by every supported report encoding.
///
/// `Unknown` is a sentinel for vocabulary the scanners are not supposed to
/// emit, not a sixth level: it never reaches the five-bucket risk summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Informational,
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Informational => "informational",
            RiskLevel::Unknown => "unknown",
        }
    }

    /// Capitalized form for rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::Informational => "Informational",
            RiskLevel::Unknown => "Unknown",
        }
    }

    /// Sort key, most severe first. `Unknown` sorts after every real level.
    pub fn rank(&self) -> u8 {
        match self {
            RiskLevel::Critical => 0,
            RiskLevel::High => 1,
            RiskLevel::Medium => 2,
            RiskLevel::Low => 3,
            RiskLevel::Informational => 4,
            RiskLevel::Unknown => 5,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
