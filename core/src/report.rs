use crate::recommend;
use crate::types::{Finding, Recommendation, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Running count per recognized risk level. Findings with `Unknown` risk
/// stay in the finding list but are never counted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RiskSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
}

impl RiskSummary {
    pub fn record(&mut self, risk: RiskLevel) {
        match risk {
            RiskLevel::Critical => self.critical += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
            RiskLevel::Informational => self.informational += 1,
            RiskLevel::Unknown => {}
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.informational
    }

    pub fn critical_and_high(&self) -> usize {
        self.critical + self.high
    }

    /// (level, count) rows in severity order, for tables and console output.
    pub fn rows(&self) -> [(RiskLevel, usize); 5] {
        [
            (RiskLevel::Critical, self.critical),
            (RiskLevel::High, self.high),
            (RiskLevel::Medium, self.medium),
            (RiskLevel::Low, self.low),
            (RiskLevel::Informational, self.informational),
        ]
    }
}

/// State accumulated over one analysis run: every normalized finding, the
/// risk summary, the derived recommendations, and any per-report failures
/// that were recovered by skipping the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: DateTime<Utc>,

    pub reports_dir: PathBuf,

    pub summary: RiskSummary,

    pub findings: Vec<Finding>,

    pub recommendations: Vec<Recommendation>,

    pub errors: Vec<String>,
}

impl AnalysisReport {
    pub fn new(reports_dir: PathBuf) -> Self {
        Self {
            timestamp: Utc::now(),
            reports_dir,
            summary: RiskSummary::default(),
            findings: Vec::new(),
            recommendations: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Adds one normalized finding and counts it against its risk bucket.
    pub fn add_finding(&mut self, finding: Finding) {
        self.summary.record(finding.risk);
        self.findings.push(finding);
    }

    /// Derives the recommendation list from the current findings. Replaces
    /// any previous list, so repeated calls on unchanged findings produce
    /// identical output.
    pub fn build_recommendations(&mut self) {
        self.recommendations = recommend::build_recommendations(&self.findings);
    }

    pub fn has_high_risk(&self) -> bool {
        self.summary.critical_and_high() > 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(name: &str, risk: RiskLevel) -> Finding {
        Finding {
            id: "10038".to_string(),
            name: name.to_string(),
            risk,
            confidence: "Medium".to_string(),
            description: String::new(),
            solution: String::new(),
            reference: String::new(),
            instance_count: 0,
            urls: Vec::new(),
            cwe_id: None,
            wasc_id: None,
            source: "ZAP".to_string(),
        }
    }

    #[test]
    fn summary_counts_each_recognized_level_once() {
        let mut report = AnalysisReport::new(PathBuf::from("reports"));
        report.add_finding(finding("a", RiskLevel::Critical));
        report.add_finding(finding("b", RiskLevel::High));
        report.add_finding(finding("c", RiskLevel::High));
        report.add_finding(finding("d", RiskLevel::Medium));
        report.add_finding(finding("e", RiskLevel::Low));
        report.add_finding(finding("f", RiskLevel::Informational));

        assert_eq!(report.summary.critical, 1);
        assert_eq!(report.summary.high, 2);
        assert_eq!(report.summary.medium, 1);
        assert_eq!(report.summary.low, 1);
        assert_eq!(report.summary.informational, 1);
        assert_eq!(report.summary.total(), 6);
        assert_eq!(report.summary.critical_and_high(), 3);
    }

    #[test]
    fn unknown_findings_are_kept_but_not_counted() {
        let mut report = AnalysisReport::new(PathBuf::from("reports"));
        report.add_finding(finding("odd", RiskLevel::Unknown));
        report.add_finding(finding("real", RiskLevel::Low));

        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.summary.total(), 1);
        assert!(!report.has_high_risk());
    }

    #[test]
    fn build_recommendations_replaces_instead_of_appending() {
        let mut report = AnalysisReport::new(PathBuf::from("reports"));
        report.add_finding(finding("X-Frame-Options Header Not Set", RiskLevel::Medium));
        report.add_finding(finding("X-Frame-Options Header Not Set", RiskLevel::Medium));

        report.build_recommendations();
        let first = report.recommendations.clone();
        report.build_recommendations();

        assert_eq!(report.recommendations, first);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].count, 2);
    }

    #[test]
    fn serializes_summary_for_machine_checks() {
        let mut report = AnalysisReport::new(PathBuf::from("reports"));
        report.add_finding(finding("a", RiskLevel::High));

        let json = report.to_json().unwrap();
        assert!(json.contains("\"high\": 1"));
        assert!(json.contains("\"risk\": \"high\""));
    }
}
