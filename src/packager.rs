//! Packager
//!
//! Compresses the output directory into `<outputDir>.zip` beside it.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::emitter::{hash_content, normalize_dir};
use crate::error::{SplinterError, SplinterResult};
use crate::models::{OutputTarget, WrittenFile};

/// `<dir>.zip`; the suffix is appended, never substituted for an extension.
///
/// The directory is normalized first, so `out/` and `out/.` both give
/// `out.zip` and `.` names the archive after the working directory.
pub fn archive_path(output_dir: &Path) -> PathBuf {
    let mut name = normalize_dir(output_dir).into_os_string();
    name.push(".zip");
    PathBuf::from(name)
}

/// Archive every file under `output_dir`.
///
/// The walk and compression are synchronous and run on the blocking pool.
pub async fn package(output_dir: &Path) -> SplinterResult<WrittenFile> {
    let dir = output_dir.to_path_buf();
    let archive = archive_path(&dir);

    let written = tokio::task::spawn_blocking(move || write_archive(&dir, &archive))
        .await
        .map_err(|e| SplinterError::packaging(output_dir, format!("packaging task failed: {e}")))??;

    debug!(
        archive = %written.path.display(),
        bytes = written.bytes,
        "archive written"
    );
    Ok(written)
}

fn write_archive(dir: &Path, archive: &Path) -> SplinterResult<WrittenFile> {
    if !dir.is_dir() {
        return Err(SplinterError::packaging(dir, "output directory does not exist"));
    }

    let files = collect_files(dir)?;
    if files.is_empty() {
        return Err(SplinterError::packaging(dir, "output directory holds no files"));
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for (relative, path) in &files {
        let contents =
            std::fs::read(path).map_err(|e| SplinterError::packaging(path, e.to_string()))?;
        zip.start_file(relative.as_str(), options)
            .map_err(|e| SplinterError::packaging(archive, e.to_string()))?;
        zip.write_all(&contents)
            .map_err(|e| SplinterError::packaging(archive, e.to_string()))?;
        debug!(entry = %relative, bytes = contents.len(), "archived");
    }

    let bytes = zip
        .finish()
        .map_err(|e| SplinterError::packaging(archive, e.to_string()))?
        .into_inner();

    std::fs::write(archive, &bytes).map_err(|e| SplinterError::packaging(archive, e.to_string()))?;

    Ok(WrittenFile {
        target: OutputTarget::Archive,
        path: archive.to_path_buf(),
        bytes: bytes.len() as u64,
        hash: hash_content(&bytes),
    })
}

/// Regular files under `dir` as (`/`-separated relative name, absolute path),
/// in sorted walk order.
fn collect_files(dir: &Path) -> SplinterResult<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| SplinterError::packaging(dir, e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| SplinterError::packaging(entry.path(), e.to_string()))?;
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push((name, entry.into_path()));
    }
    Ok(files)
}
