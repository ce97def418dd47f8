use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The Error type for filter pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(
        "Filter '{filter_name}' returned {actual} response lists, expected {expected}"
    )]
    LengthMismatch {
        filter_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Error in filter '{filter_name}': {source}")]
    StepError {
        filter_name: String,
        source: Box<PipelineError>,
    },

    #[error("Item at index {item_index} has {available} responses, filter needs {needed}")]
    NotEnoughResponses {
        item_index: usize,
        available: usize,
        needed: usize,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
