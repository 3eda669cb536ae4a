use crate::episode::{EpisodeNumber, Exclusions};
use crate::error::{AppError, Result};
use crate::file::SourceFile;

/// Result of splitting the source stream into episodes and extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Episodes in increasing episode number order
    pub episodes: Vec<(EpisodeNumber, SourceFile)>,
    /// Extras in stream order
    pub extras: Vec<SourceFile>,
}

impl Classification {
    pub fn total_files(&self) -> usize {
        self.episodes.len() + self.extras.len()
    }
}

/// Splits `files` into episodes (strictly larger than `min_size`) and extras.
///
/// The episode counter starts at 1 and is shared by the whole stream. Before
/// each file, the counter is moved past any excluded number; only episodes
/// consume a number. `None` means every number has been handed out, which is
/// an error only if another episode turns up.
pub fn classify<I>(files: I, min_size: u64, exclusions: &Exclusions) -> Result<Classification>
where
    I: IntoIterator<Item = SourceFile>,
{
    let (_, classification) = files.into_iter().try_fold(
        (Some(1), Classification::default()),
        |(next, mut acc): (Option<EpisodeNumber>, Classification), file| {
            let next = next.map(|n| exclusions.next_allowed(n));

            if file.size > min_size {
                let Some(number) = next else {
                    return Err(AppError::EpisodeNumbersExhausted { path: file.path });
                };
                tracing::debug!("Episode {}: {}", number, file.path.display());
                acc.episodes.push((number, file));
                Ok((number.checked_add(1), acc))
            } else {
                tracing::debug!("Extra: {} ({} bytes)", file.path.display(), file.size);
                acc.extras.push(file);
                Ok((next, acc))
            }
        },
    )?;

    Ok(classification)
}
