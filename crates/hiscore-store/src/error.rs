use std::io;
use std::path::PathBuf;

/// Errors from score store operations.
///
/// Variants are tagged by the phase that failed so callers can tell a
/// missing or unreadable medium apart from corrupt content or a failed write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read scores from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing content is not a valid score document.
    #[error("malformed score document{}: {source}", path_suffix(path))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be encoded.
    #[error("failed to encode scores: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backing file could not be written.
    #[error("failed to write scores to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Attach the backing file path to a decode error raised by the codec.
    pub(crate) fn at_path(self, at: &std::path::Path) -> Self {
        match self {
            Self::Decode { path: None, source } => Self::Decode {
                path: Some(at.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
