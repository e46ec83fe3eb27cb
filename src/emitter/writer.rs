//! Output file writing
//!
//! Each write opens, fills and flushes its own handle; the handle is dropped
//! (closed) on every return path.

use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio::io::AsyncWriteExt;

use crate::error::{SplinterError, SplinterResult};
use crate::models::{OutputTarget, WrittenFile};

/// Tidy an output directory: `.` components go and `..` cancels the name
/// before it. A path left without a final name (`.`, `x/..`) is made absolute
/// so the directory has a name to archive under.
pub fn normalize_dir(dir: &Path) -> PathBuf {
    let tidy = lexical(dir);
    if matches!(tidy.components().next_back(), Some(Component::Normal(_))) {
        return tidy;
    }
    match std::env::current_dir() {
        Ok(cwd) => lexical(&cwd.join(tidy)),
        Err(_) => tidy,
    }
}

fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Create `dir` and any missing parents.
pub async fn ensure_dir(dir: &Path) -> SplinterResult<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| SplinterError::write(OutputTarget::OutputDir, dir, e))
}

/// Write `contents` to `path`, replacing any existing file.
pub async fn write_file(
    target: OutputTarget,
    path: &Path,
    contents: &[u8],
) -> SplinterResult<WrittenFile> {
    let err = |e| SplinterError::write(target, path, e);

    let mut file = tokio::fs::File::create(path).await.map_err(err)?;
    file.write_all(contents).await.map_err(err)?;
    file.flush().await.map_err(err)?;

    Ok(WrittenFile {
        target,
        path: path.to_path_buf(),
        bytes: contents.len() as u64,
        hash: hash_content(contents),
    })
}

/// SHA-256 of `content` as `sha256:<hex>`
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
