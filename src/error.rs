use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to read {path}: {0}", path = .1.display())]
    Read(std::io::Error, PathBuf),
    #[error("Classification Error: {0}")]
    Classify(#[from] ClassifyError),
    #[error("UI Error: {0}")]
    Ui(String),
}

// Classification Request Error Type
//
// Every variant ends the scan the same way; only the notification differs for
// timeouts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Failed to reach the classification service: {0}")]
    Transport(String),
    #[error("Classification service responded with HTTP {0}")]
    Status(u16),
    #[error("Classification service returned a malformed response: {0}")]
    Decode(String),
    #[error("Classification request timed out after {0:?}")]
    Timeout(Duration),
}

impl ClassifyError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClassifyError::Timeout(_))
    }
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClassifyError::Decode(err.to_string())
        } else {
            ClassifyError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        ClassifyError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = AppError::Read(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            PathBuf::from("/tmp/cat.png"),
        );
        assert_eq!(err.to_string(), "Failed to read /tmp/cat.png: missing");
    }

    #[test]
    fn only_timeouts_report_as_timeouts() {
        assert!(ClassifyError::Timeout(Duration::from_secs(1)).is_timeout());
        assert!(!ClassifyError::Status(500).is_timeout());
        assert!(!ClassifyError::Transport("refused".into()).is_timeout());
    }
}
