//! Local file operations
//!
//! Username listing from a CSV export, cache directory management, and log
//! archiving.

use std::fs::File;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// Read the first `limit` usernames from a CSV file
///
/// The first row is a header and is skipped. The username is the first
/// column, with standard CSV quoting (embedded commas and newlines survive).
/// Rows with an empty first column are ignored. A missing file yields an
/// empty list.
pub fn read_usernames(path: impl AsRef<Path>, limit: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(path = %path.display(), "CSV file not found");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut usernames = Vec::with_capacity(limit);
    for record in reader.records() {
        if usernames.len() == limit {
            break;
        }

        let record = record?;
        match record.get(0) {
            Some(username) if !username.is_empty() => usernames.push(username.to_string()),
            _ => continue,
        }
    }

    Ok(usernames)
}

/// Create the cache directory if it is missing
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_cache_dir(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }

    std::fs::create_dir_all(path)?;
    tracing::info!(path = %path.display(), "Created cache folder");
    Ok(true)
}

/// Archive the regular files in `log_dir` into a ZIP file at `zip_path`
///
/// Subdirectories are not descended into. Entries are named by file name
/// and written in name order; the names are returned. When `log_dir` does
/// not exist nothing is written and the result is empty. An existing
/// archive at `zip_path` is replaced.
pub fn archive_logs(
    log_dir: impl AsRef<Path>,
    zip_path: impl AsRef<Path>,
) -> Result<Vec<String>> {
    let log_dir = log_dir.as_ref();
    let zip_path = zip_path.as_ref();
    if !log_dir.is_dir() {
        tracing::warn!(path = %log_dir.display(), "Log folder not found, nothing to archive");
        return Ok(Vec::new());
    }

    // The archive may live inside the folder being archived
    let target = zip_path.canonicalize().ok();

    let mut logs = Vec::new();
    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if target.is_some() && path.canonicalize().ok() == target {
            continue;
        }
        logs.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    logs.sort();

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(File::create(zip_path)?);
    let mut archived = Vec::with_capacity(logs.len());

    for (name, path) in logs {
        zip.start_file(name.as_str(), options)?;
        std::io::copy(&mut File::open(&path)?, &mut zip)?;
        tracing::info!(file = %name, archive = %zip_path.display(), "Archived log file");
        archived.push(name);
    }
    zip.finish()?;

    Ok(archived)
}
