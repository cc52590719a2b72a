use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("--output can only be used with a single input; got {count} inputs (use --output-dir)")]
    OutputWithBatch { count: usize },

    #[error("{failed} of {total} inputs failed")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Clip(#[from] imgclip::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
