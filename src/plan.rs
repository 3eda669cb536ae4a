use crate::classifier::Classification;
use crate::config::{ConfigError, RenameConfig};
use crate::episode::EpisodeNumber;
use crate::error::{AppError, Result};
use crate::file::SourceFile;
use crate::naming::{episode_file_name, extra_file_name, resolve_extra_number};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentKind {
    Episode(EpisodeNumber),
    Extra(u32),
}

/// A source file paired with the path it will be moved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub source: SourceFile,
    pub destination: PathBuf,
    pub kind: AssignmentKind,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.source.path.display(),
            self.destination.display()
        )
    }
}

/// Ordered list of moves: all episodes first, then all extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub assignments: Vec<Assignment>,
}

impl RenamePlan {
    /// Builds destinations for every classified file.
    ///
    /// Extra numbers are resolved against the extras directory as it is now,
    /// each search starting one past the previous extra's number.
    pub fn build(classification: Classification, config: &RenameConfig) -> Result<Self> {
        let mut assignments = Vec::with_capacity(classification.total_files());

        for (number, source) in classification.episodes {
            let ext = source.extension();
            let name = episode_file_name(&config.title, &config.season, number, &ext);
            assignments.push(Assignment {
                destination: config.dest_dir.join(name),
                source,
                kind: AssignmentKind::Episode(number),
            });
        }

        if classification.extras.is_empty() {
            return Ok(Self { assignments });
        }

        // Only reachable with a zero threshold and an empty source file
        let Some(extras_dir) = config.extras_dir.as_deref() else {
            return Err(ConfigError::MissingExtrasDir.into());
        };

        assignments.extend(extra_assignments(
            classification.extras,
            extras_dir,
            &config.title,
            1,
        )?);

        Ok(Self { assignments })
    }
}

/// Numbers `extras` in order, each search starting one past the previous
/// extra's number.
fn extra_assignments(
    extras: Vec<SourceFile>,
    extras_dir: &Path,
    title: &str,
    first: u32,
) -> Result<Vec<Assignment>> {
    let mut assignments = Vec::with_capacity(extras.len());

    // `None` once the previous extra took the last number
    let mut candidate = Some(first);
    for source in extras {
        let start = candidate.ok_or_else(|| AppError::ExtraNumbersExhausted {
            dir: extras_dir.to_path_buf(),
        })?;
        let number = resolve_extra_number(extras_dir, title, start)?;
        let name = extra_file_name(title, number, &source.extension());
        assignments.push(Assignment {
            destination: extras_dir.join(name),
            source,
            kind: AssignmentKind::Extra(number),
        });
        candidate = number.checked_add(1);
    }

    Ok(assignments)
}
