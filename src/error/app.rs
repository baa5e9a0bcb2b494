use thiserror::Error;

/// Failures outside a batch. Per-request failures never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;
