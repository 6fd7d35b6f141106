//! Triage Core Library
//!
//! Core types and analysis pipeline for the triage security-report analyzer.

pub mod error;
pub mod parse;
pub mod recommend;
pub mod render;
pub mod report;
pub mod scanner;
pub mod types;

pub use error::{Result, TriageError};
pub use report::{AnalysisReport, RiskSummary};
pub use scanner::{scan_reports, ReportKind};
pub use types::*;
