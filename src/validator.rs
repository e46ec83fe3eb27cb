//! Input validation and loading
//!
//! The validator must run before any read so that a directory given as input is
//! rejected with `InvalidInput` instead of surfacing as a generic read failure.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{SplinterError, SplinterResult};
use crate::models::SourceDocument;

/// Check that `path` names an existing regular file.
///
/// Symlinks are followed, so a link pointing at a regular file is accepted.
pub async fn validate_input(path: &Path) -> SplinterResult<()> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SplinterError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(SplinterError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if metadata.is_dir() {
        return Err(SplinterError::InvalidInput {
            path: path.to_path_buf(),
            reason: "is a directory, expected an HTML file".to_string(),
        });
    }

    if !metadata.is_file() {
        return Err(SplinterError::InvalidInput {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    debug!(path = %path.display(), bytes = metadata.len(), "input validated");
    Ok(())
}

/// Read a validated input file as UTF-8 text.
pub async fn read_document(path: &Path) -> SplinterResult<SourceDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| SplinterError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8(bytes).map_err(|e| SplinterError::InvalidInput {
        path: path.to_path_buf(),
        reason: format!(
            "not valid UTF-8 (first invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        ),
    })?;

    Ok(SourceDocument::new(path, text))
}

/// Validate then read; the two steps every split starts with.
pub async fn load_input(path: &Path) -> SplinterResult<SourceDocument> {
    validate_input(path).await?;
    read_document(path).await
}
