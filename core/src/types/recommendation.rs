use serde::{Deserialize, Serialize};

use super::risk::RiskLevel;

/// Remediation priority tier derived from a finding group's risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Critical and high findings demand HIGH priority; medium maps to
    /// MEDIUM; everything else, unknown included, is LOW.
    pub fn from_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Critical | RiskLevel::High => Priority::High,
            RiskLevel::Medium => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated remediation entry for all findings sharing one finding type.
///
/// Descriptive fields come from the group's first-seen member; `count` and
/// `affected_urls` aggregate over the whole group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub finding_type: String,
    pub count: usize,
    pub risk: RiskLevel,
    pub description: String,
    pub solution: String,
    pub affected_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe_id: Option<String>,
}
