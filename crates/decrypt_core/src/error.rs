//! Error taxonomy for one decrypt invocation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptError {
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    #[error("Failed to read object {key} from bucket {bucket}: {message}")]
    StorageRead {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to write object {key} to bucket {bucket}: {message}")]
    StorageWrite {
        bucket: String,
        key: String,
        message: String,
    },

    /// Reserved; the transform is currently total.
    #[error("Transform failed: {0}")]
    Transform(String),
}

impl DecryptError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedEvent(_) => "malformed_event",
            Self::StorageRead { .. } => "storage_read",
            Self::StorageWrite { .. } => "storage_write",
            Self::Transform(_) => "transform",
        }
    }
}
