use std::fs;
use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{Result, TriageError};
use crate::parse;
use crate::report::AnalysisReport;

/// On-disk encoding of a report file, keyed off its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Json,
    Xml,
}

/// Name marker identifying files from the supported scanner family.
const SCANNER_MARKER: &str = "zap";

/// Walks the reports directory, normalizes every recognized report, and
/// accumulates findings into a fresh run context.
///
/// A single unreadable or malformed report is logged, recorded on the run,
/// and skipped; only a missing directory fails the whole run.
pub fn scan_reports(reports_dir: &Path) -> Result<AnalysisReport> {
    if !reports_dir.is_dir() {
        return Err(TriageError::ReportsDirNotFound(reports_dir.to_path_buf()));
    }

    println!(
        "🔍 Scanning for security reports in: {}",
        reports_dir.display()
    );

    let mut report = AnalysisReport::new(reports_dir.to_path_buf());

    let walker = WalkDir::new(reports_dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let kind = match classify(path) {
            Some(kind) => kind,
            None => continue,
        };

        if let Err(err) = analyze_report(path, kind, &mut report) {
            eprintln!("❌ {}", err);
            report.errors.push(err.to_string());
        }
    }

    println!(
        "📊 Analysis complete. Found {} total findings.",
        report.findings.len()
    );

    Ok(report)
}

/// A candidate report carries the scanner family marker in its name and one
/// of the two supported extensions.
fn classify(path: &Path) -> Option<ReportKind> {
    let name = path.file_name()?.to_str()?.to_ascii_lowercase();
    if !name.contains(SCANNER_MARKER) {
        return None;
    }
    match path.extension()?.to_str()? {
        "json" => Some(ReportKind::Json),
        "xml" => Some(ReportKind::Xml),
        _ => None,
    }
}

fn analyze_report(path: &Path, kind: ReportKind, report: &mut AnalysisReport) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|source| TriageError::ReadReport {
        file: path.to_path_buf(),
        source,
    })?;

    let findings = match kind {
        ReportKind::Json => {
            println!("📊 Analyzing ZAP JSON report: {}", path.display());
            let data: Value =
                serde_json::from_str(&content).map_err(|source| TriageError::JsonParse {
                    file: path.to_path_buf(),
                    source,
                })?;
            parse::json::parse_report(&data)
        }
        ReportKind::Xml => {
            println!("📊 Analyzing ZAP XML report: {}", path.display());
            parse::xml::parse_report(&content).map_err(|source| TriageError::XmlParse {
                file: path.to_path_buf(),
                source,
            })?
        }
    };

    if findings.is_empty() {
        println!("   No alerts found in report");
    } else {
        println!("   Found {} security alerts", findings.len());
    }

    for finding in findings {
        report.add_finding(finding);
    }

    Ok(())
}
