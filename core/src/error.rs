use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Reports directory not found: {0}")]
    ReportsDirNotFound(PathBuf),

    #[error("Failed to read report {file}: {source}")]
    ReadReport {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON report {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid XML report {file}: {source}")]
    XmlParse {
        file: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Failed to write report {file}: {source}")]
    WriteReport {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TriageError>;
