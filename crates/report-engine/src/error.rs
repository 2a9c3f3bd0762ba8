use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown report type: {0}")]
    UnknownReportType(String),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}
