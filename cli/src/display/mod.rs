use colored::Colorize;
use triage_core::{render, AnalysisReport};

pub fn print_report(report: &AnalysisReport) {
    println!("\n{}", "=".repeat(60));
    println!("SECURITY ANALYSIS SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Reports: {}", report.reports_dir.display());
    println!();

    println!("Findings: {}", report.findings.len());
    if report.summary.critical > 0 {
        println!(
            "  Critical: {}",
            report.summary.critical.to_string().red().bold()
        );
    }
    if report.summary.high > 0 {
        println!("  High: {}", report.summary.high.to_string().red());
    }
    if report.summary.medium > 0 {
        println!("  Medium: {}", report.summary.medium.to_string().yellow());
    }
    if report.summary.low > 0 {
        println!("  Low: {}", report.summary.low.to_string().green());
    }
    if report.summary.informational > 0 {
        println!("  Informational: {}", report.summary.informational);
    }
    println!("Recommendations: {}", report.recommendations.len());
    println!();

    if !report.errors.is_empty() {
        println!("Errors:");
        for error in &report.errors {
            println!("  - {}", error);
        }
        println!();
    }

    println!("{}", render::executive_summary(&report.summary));

    if report.has_high_risk() {
        println!("⚠️  Critical or high-risk vulnerabilities found!");
    }
}

pub fn print_json(report: &AnalysisReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
