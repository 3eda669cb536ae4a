use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A file found directly inside one of the source directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub size: u64,
}

impl SourceFile {
    pub const fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }

    /// Extension including the leading dot, or empty.
    ///
    /// Dotfiles such as `.nfo` have no extension; `name.` yields `"."`.
    pub fn extension(&self) -> OsString {
        extension_of(&self.path)
    }
}

/// Raw extension bytes are kept as-is, even when they are not valid UTF-8.
pub fn extension_of(path: &Path) -> OsString {
    let mut ext = OsString::new();
    if let Some(raw) = path.extension() {
        ext.push(".");
        ext.push(raw);
    }
    ext
}
