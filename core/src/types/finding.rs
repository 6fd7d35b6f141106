use serde::{Deserialize, Serialize};

use super::risk::RiskLevel;

/// One normalized security finding, independent of the report encoding it
/// came from.
///
/// `instance_count` is the number of occurrences the scanner reported for
/// this alert and always equals the length of the `instances` collection at
/// ingestion time, even when `urls` is later deduplicated for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub name: String,
    pub risk: RiskLevel,
    pub confidence: String,
    pub description: String,
    pub solution: String,
    pub reference: String,
    pub instance_count: usize,
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wasc_id: Option<String>,
    pub source: String,
}
