//! Loading source text from disk.

use std::path::{Path, PathBuf};

/// Failure to obtain source text from a file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{}' is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}

impl SourceError {
    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Io { path, .. } | SourceError::NotUtf8 { path } => path,
        }
    }
}

/// Read a whole file as UTF-8 source text.
pub fn load_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source");
    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
        path: path.to_path_buf(),
    })
}
