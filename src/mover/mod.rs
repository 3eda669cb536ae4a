use std::fs;
use std::io;
use std::path::Path;

/// Permissions for directories created by a real run (owner and group only)
pub const DIR_MODE: u32 = 0o770;

/// Trait for applying planned moves.
/// Real moves rename on disk; dry runs only report.
pub trait Mover {
    /// Make sure `dir` exists before anything is moved into it.
    ///
    /// # Errors
    /// Returns `io::Error` if the directory cannot be created
    fn ensure_dir(&self, dir: &Path) -> io::Result<()>;

    /// Move file from source to destination
    ///
    /// # Arguments
    /// * `source` - Full path to source file
    /// * `destination` - Full path to destination file
    ///
    /// # Errors
    /// Returns `io::Error` if operation fails
    fn move_file(&self, source: &Path, destination: &Path) -> io::Result<()>;
}

/// `DryRun` implementation - prints `source -> destination` and touches nothing
pub struct DryRunMover;

/// Moves files with a single `rename`, so a move is atomic or fails outright.
/// There is no copy fallback across filesystems.
pub struct RenameMover;

impl Mover for RenameMover {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }

        builder.create(dir)?;
        tracing::debug!("Ensured directory: {}", dir.display());
        Ok(())
    }

    fn move_file(&self, source: &Path, destination: &Path) -> io::Result<()> {
        if !source.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Source file does not exist: {}", source.display()),
            ));
        }

        // rename(2) silently replaces an existing file; refuse instead
        if fs::symlink_metadata(destination).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Destination already exists: {}", destination.display()),
            ));
        }

        fs::rename(source, destination)?;

        tracing::info!("Moved: {} -> {}", source.display(), destination.display());

        Ok(())
    }
}

impl Mover for DryRunMover {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        if !dir.exists() {
            println!("Creating path {}", dir.display());
        }
        Ok(())
    }

    fn move_file(&self, source: &Path, destination: &Path) -> io::Result<()> {
        println!("{} -> {}", source.display(), destination.display());
        Ok(())
    }
}
