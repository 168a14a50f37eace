use thiserror::Error;

/// Errors reported by the quartile summarizer and the summary mapping.
///
/// All of these indicate a data-quality problem that must be fixed at
/// ingestion; none are retryable.
#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    #[error("no samples supplied")]
    EmptyInput,

    #[error("sample {index} (group '{group}') has a non-finite value")]
    InvalidSample { group: String, index: usize },

    #[error("no summary for group '{0}'")]
    UnknownGroup(String),
}
