use crate::error::{AppError, Result};
use crate::file::SourceFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped and never descended into. Symlinks are followed
/// so a link to a file is reported with the target's size.
pub fn list_directory(dir: &Path) -> Result<Vec<SourceFile>> {
    let read_error = |reason: String| AppError::ReadDir {
        path: dir.to_path_buf(),
        reason,
    };

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| read_error(e.to_string()))?;

        if !entry.file_type().is_file() {
            tracing::debug!("Skipping non-file entry: {}", entry.path().display());
            continue;
        }

        let size = entry
            .metadata()
            .map_err(|e| read_error(e.to_string()))?
            .len();

        files.push(SourceFile::new(entry.into_path(), size));
    }

    tracing::debug!("Found {} files in {}", files.len(), dir.display());

    Ok(files)
}

/// Concatenates the listings of `dirs` in the order given.
pub fn collect_source_files(dirs: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for dir in dirs {
        files.extend(list_directory(dir)?);
    }
    Ok(files)
}
