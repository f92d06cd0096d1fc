use thiserror::Error;

/// Engine error types.
///
/// Indicator math never fails; these cover the worker boundary and the wire.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Compute queue is closed")]
    QueueClosed,

    #[error("Worker error: {0}")]
    Worker(String),

    #[error(transparent)]
    InvalidMessage(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<tokio::task::JoinError> for EngineError {
    fn from(e: tokio::task::JoinError) -> Self {
        EngineError::Worker(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        let err = EngineError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout"));
        assert!(matches!(err, EngineError::Io(_)));
        assert_eq!(err.to_string(), "stdout");
    }
}
