use crate::episode::EpisodeNumber;
use crate::error::{AppError, Result};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use walkdir::WalkDir;

/// `{title} S{season}E{number}{ext}`. Numbers are not zero-padded.
pub fn episode_file_name(
    title: &str,
    season: &str,
    number: EpisodeNumber,
    ext: &OsStr,
) -> OsString {
    let mut name = OsString::from(format!("{title} S{season}E{number}"));
    name.push(ext);
    name
}

/// `{title} Extra {number}{ext}`
pub fn extra_file_name(title: &str, number: u32, ext: &OsStr) -> OsString {
    let mut name = OsString::from(extra_stem(title, number));
    name.push(ext);
    name
}

fn extra_stem(title: &str, number: u32) -> String {
    format!("{title} Extra {number}")
}

/// Returns the first extra number at or after `candidate` that is not used by
/// any `"{title} Extra {N}.*"` file already in `extras_dir`.
///
/// The directory is re-read on every call. A directory that does not exist
/// yet holds no extras.
pub fn resolve_extra_number(extras_dir: &Path, title: &str, candidate: u32) -> Result<u32> {
    let existing = if extras_dir.exists() {
        list_names(extras_dir)?
    } else {
        Vec::new()
    };

    let mut number = candidate;
    loop {
        let prefix = format!("{}.", extra_stem(title, number));
        let taken = existing
            .iter()
            .any(|name| name.as_encoded_bytes().starts_with(prefix.as_bytes()));
        if !taken {
            return Ok(number);
        }

        tracing::debug!(
            "Extra number {} already taken in {}",
            number,
            extras_dir.display()
        );
        number = number
            .checked_add(1)
            .ok_or_else(|| AppError::ExtraNumbersExhausted {
                dir: extras_dir.to_path_buf(),
            })?;
    }
}

fn list_names(dir: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| AppError::ReadDir {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        names.push(entry.file_name().to_os_string());
    }

    Ok(names)
}
