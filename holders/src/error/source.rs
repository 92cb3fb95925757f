use thiserror::Error;

/// Why a live source produced no holders. Every variant is recoverable: the
/// fetch chain logs it and moves on to the next source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{source_name}: request failed: {message}")]
    Transport { source_name: String, message: String },

    #[error("{source_name}: unexpected status {status}")]
    Status { source_name: String, status: u16 },

    #[error("{source_name}: malformed response: {message}")]
    Malformed { source_name: String, message: String },
}

impl SourceError {
    pub fn transport(source_name: &str, e: impl std::fmt::Display) -> Self {
        SourceError::Transport {
            source_name: source_name.to_string(),
            message: e.to_string(),
        }
    }

    pub fn status(source_name: &str, status: u16) -> Self {
        SourceError::Status {
            source_name: source_name.to_string(),
            status,
        }
    }

    pub fn malformed(source_name: &str, message: impl std::fmt::Display) -> Self {
        SourceError::Malformed {
            source_name: source_name.to_string(),
            message: message.to_string(),
        }
    }
}
