use std::fs;
use std::path::Path;

use crate::error::{Result, TriageError};
use crate::report::{AnalysisReport, RiskSummary};
use crate::types::Priority;

const MAX_RENDERED_RECOMMENDATIONS: usize = 10;

/// Executive status plus risk distribution, worded by how many critical and
/// high findings the run produced.
pub fn executive_summary(summary: &RiskSummary) -> String {
    let total = summary.total();

    if total == 0 {
        return "✅ **EXCELLENT**: No security vulnerabilities were identified during the assessment."
            .to_string();
    }

    let status = match summary.critical_and_high() {
        0 => "✅ **GOOD**: No critical or high-risk vulnerabilities found.",
        1..=3 => "⚠️ **ATTENTION REQUIRED**: Few high-risk vulnerabilities identified.",
        _ => "🚨 **IMMEDIATE ACTION REQUIRED**: Multiple high-risk vulnerabilities found.",
    };

    format!(
        "\n{}\n\n**Risk Distribution:**\n- Critical: {}\n- High: {}\n- Medium: {}\n- Low: {}\n- Informational: {}\n\n**Total Findings:** {}\n",
        status,
        summary.critical,
        summary.high,
        summary.medium,
        summary.low,
        summary.informational,
        total
    )
}

/// Renders the full Markdown document: title block, executive summary, risk
/// table, the top HIGH-priority recommendations, and every raw finding.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# Security Analysis Report\n\n");
    out.push_str(&format!(
        "**Generated:** {}\n\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("## Executive Summary\n");
    out.push_str(&executive_summary(&report.summary));
    out.push_str("\n\n");

    out.push_str("## Risk Summary\n\n");
    out.push_str("| Risk Level | Count | Percentage |\n");
    out.push_str("|------------|-------|------------|\n");
    let total = report.summary.total();
    for (level, count) in report.summary.rows() {
        let percentage = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            level.label(),
            count,
            percentage
        ));
    }
    out.push('\n');

    out.push_str("## Priority Recommendations\n\n");
    let high_priority: Vec<_> = report
        .recommendations
        .iter()
        .filter(|rec| rec.priority == Priority::High)
        .collect();

    if high_priority.is_empty() {
        out.push_str("No high-priority recommendations at this time.\n\n");
    } else {
        for (i, rec) in high_priority
            .iter()
            .take(MAX_RENDERED_RECOMMENDATIONS)
            .enumerate()
        {
            out.push_str(&format!(
                "### {}. {} ({} instances)\n",
                i + 1,
                rec.finding_type,
                rec.count
            ));
            out.push_str(&format!("**Risk Level:** {}\n", rec.risk.label()));
            out.push_str(&format!("**Priority:** {}\n\n", rec.priority));
            out.push_str(&format!("**Description:** {}\n\n", rec.description));
            out.push_str(&format!("**Solution:** {}\n\n", rec.solution));
            if let Some(cwe_id) = &rec.cwe_id {
                out.push_str(&format!("**CWE ID:** {}\n\n", cwe_id));
            }
            if !rec.affected_urls.is_empty() {
                out.push_str("**Sample Affected URLs:**\n");
                for url in &rec.affected_urls {
                    out.push_str(&format!("- {}\n", url));
                }
                out.push('\n');
            }
            out.push_str("---\n\n");
        }
    }

    out.push_str("## Detailed Findings\n\n");
    for (i, finding) in report.findings.iter().enumerate() {
        out.push_str(&format!("### Finding {}: {}\n", i + 1, finding.name));
        out.push_str(&format!("- **Risk:** {}\n", finding.risk.label()));
        out.push_str(&format!("- **Confidence:** {}\n", finding.confidence));
        out.push_str(&format!("- **Plugin ID:** {}\n", finding.id));
        out.push_str(&format!("- **Instances:** {}\n", finding.instance_count));
        if let Some(cwe_id) = &finding.cwe_id {
            out.push_str(&format!("- **CWE ID:** {}\n", cwe_id));
        }
        out.push_str(&format!("\n**Description:** {}\n\n", finding.description));
        if !finding.solution.is_empty() {
            out.push_str(&format!("**Solution:** {}\n\n", finding.solution));
        }
        out.push_str("---\n\n");
    }

    out
}

/// Writes the rendered document, overwriting any existing file. Write
/// failures are fatal for the run and surface to the caller.
pub fn write_markdown(report: &AnalysisReport, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report)).map_err(|source| TriageError::WriteReport {
        file: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Finding, RiskLevel};
    use std::path::PathBuf;

    fn finding(name: &str, risk: RiskLevel) -> Finding {
        Finding {
            id: "10020".to_string(),
            name: name.to_string(),
            risk,
            confidence: "Medium".to_string(),
            description: format!("{} was detected.", name),
            solution: format!("Fix {}.", name),
            reference: String::new(),
            instance_count: 1,
            urls: vec!["https://example.test/".to_string()],
            cwe_id: Some("1021".to_string()),
            wasc_id: None,
            source: "ZAP".to_string(),
        }
    }

    fn report_with(risks: &[RiskLevel]) -> AnalysisReport {
        let mut report = AnalysisReport::new(PathBuf::from("reports"));
        for (i, risk) in risks.iter().enumerate() {
            report.add_finding(finding(&format!("Finding Type {}", i), *risk));
        }
        report.build_recommendations();
        report
    }

    #[test]
    fn empty_run_renders_clean_report() {
        let rendered = render_markdown(&report_with(&[]));

        assert!(rendered.contains("# Security Analysis Report"));
        assert!(rendered.contains("No security vulnerabilities were identified"));
        assert!(rendered.contains("| Critical | 0 | 0.0% |"));
        assert!(rendered.contains("| Informational | 0 | 0.0% |"));
        assert!(rendered.contains("No high-priority recommendations at this time."));
    }

    #[test]
    fn summary_wording_follows_the_threshold_ladder() {
        let none = report_with(&[RiskLevel::Low]);
        assert!(executive_summary(&none.summary).contains("**GOOD**"));

        let few = report_with(&[RiskLevel::High, RiskLevel::High, RiskLevel::High]);
        assert!(executive_summary(&few.summary).contains("**ATTENTION REQUIRED**"));

        let many = report_with(&[
            RiskLevel::High,
            RiskLevel::High,
            RiskLevel::High,
            RiskLevel::Critical,
        ]);
        assert!(executive_summary(&many.summary).contains("**IMMEDIATE ACTION REQUIRED**"));
    }

    #[test]
    fn percentages_split_the_total() {
        let rendered = render_markdown(&report_with(&[RiskLevel::High, RiskLevel::Low]));

        assert!(rendered.contains("| High | 1 | 50.0% |"));
        assert!(rendered.contains("| Low | 1 | 50.0% |"));
        assert!(rendered.contains("| Medium | 0 | 0.0% |"));
    }

    #[test]
    fn high_priority_recommendations_are_numbered_sections() {
        let rendered = render_markdown(&report_with(&[RiskLevel::High]));

        assert!(rendered.contains("### 1. Finding Type 0 (1 instances)"));
        assert!(rendered.contains("**Priority:** HIGH"));
        assert!(rendered.contains("**CWE ID:** 1021"));
        assert!(rendered.contains("**Sample Affected URLs:**"));
    }

    #[test]
    fn every_finding_is_itemized() {
        let rendered = render_markdown(&report_with(&[RiskLevel::Low, RiskLevel::Unknown]));

        assert!(rendered.contains("### Finding 1: Finding Type 0"));
        assert!(rendered.contains("### Finding 2: Finding Type 1"));
        assert!(rendered.contains("- **Risk:** Unknown"));
        assert!(rendered.contains("- **Instances:** 1"));
    }

    #[test]
    fn writes_and_overwrites_the_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("security-analysis-report.md");
        std::fs::write(&path, "stale").unwrap();

        write_markdown(&report_with(&[RiskLevel::Medium]), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Security Analysis Report"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn write_failure_surfaces_to_the_caller() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.md");

        let err = write_markdown(&report_with(&[]), &path).unwrap_err();
        assert!(matches!(err, TriageError::WriteReport { .. }));
    }
}
