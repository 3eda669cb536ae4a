mod error;
mod size;

pub use error::{ConfigError, Result};
pub use size::parse_size;

use crate::Cli;
use crate::episode::Exclusions;
use std::path::PathBuf;

/// Validated settings for a single rename run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub dest_dir: PathBuf,
    pub title: String,
    pub season: String,
    /// Files strictly larger than this are episodes
    pub min_size: u64,
    pub extras_dir: Option<PathBuf>,
    pub exclusions: Exclusions,
    pub dry_run: bool,
    pub source_dirs: Vec<PathBuf>,
}

impl RenameConfig {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidTitle {
                value: self.title.clone(),
                reason: "title must not be empty".to_string(),
            });
        }

        if self.title.contains(['/', '\\', '\0']) {
            return Err(ConfigError::InvalidTitle {
                value: self.title.clone(),
                reason: "title must not contain path separators".to_string(),
            });
        }

        if self.season.is_empty() || !self.season.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidSeason {
                value: self.season.clone(),
            });
        }

        if self.min_size > 0 && self.extras_dir.is_none() {
            return Err(ConfigError::MissingExtrasDir);
        }

        Ok(())
    }
}

impl TryFrom<Cli> for RenameConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self> {
        let config = Self {
            dest_dir: cli.dest_dir,
            title: cli.title,
            season: cli.season,
            min_size: cli.min_size,
            extras_dir: cli.extras_dir,
            exclusions: Exclusions::new(cli.missing),
            dry_run: cli.dry_run,
            source_dirs: cli.dirs,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_from(args: &[&str]) -> Result<RenameConfig> {
        let mut argv = vec!["episodenamer"];
        argv.extend_from_slice(args);
        RenameConfig::try_from(Cli::parse_from(argv))
    }

    #[test]
    fn test_minimal_config() {
        let config = config_from(&["-d", "/out", "-t", "Show", "-s", "1", "/in"]).unwrap();

        assert_eq!(config.dest_dir, PathBuf::from("/out"));
        assert_eq!(config.title, "Show");
        assert_eq!(config.season, "1");
        assert_eq!(config.min_size, 0);
        assert_eq!(config.extras_dir, None);
        assert!(config.exclusions.is_empty());
        assert!(!config.dry_run);
        assert_eq!(config.source_dirs, vec![PathBuf::from("/in")]);
    }

    #[test]
    fn test_min_size_requires_extras_dir() {
        let result = config_from(&["-d", "/out", "-t", "Show", "-s", "1", "-m", "100M", "/in"]);
        assert_eq!(result.unwrap_err(), ConfigError::MissingExtrasDir);

        let config = config_from(&[
            "-d", "/out", "-t", "Show", "-s", "1", "-m", "100M", "-e", "/extras", "/in",
        ])
        .unwrap();
        assert_eq!(config.min_size, 100 * 1024 * 1024);
        assert_eq!(config.extras_dir, Some(PathBuf::from("/extras")));
    }

    #[test]
    fn test_zero_min_size_without_extras_dir() {
        assert!(config_from(&["-d", "/out", "-t", "Show", "-s", "1", "-m", "0G", "/in"]).is_ok());
    }

    #[test]
    fn test_invalid_season() {
        for season in ["", "one", "1a", "2.5"] {
            let result = config_from(&["-d", "/out", "-t", "Show", "-s", season, "/in"]);
            assert!(
                matches!(result, Err(ConfigError::InvalidSeason { .. })),
                "season {season:?}"
            );
        }
    }

    #[test]
    fn test_season_kept_verbatim() {
        let config = config_from(&["-d", "/out", "-t", "Show", "-s", "03", "/in"]).unwrap();
        assert_eq!(config.season, "03");
    }

    #[test]
    fn test_invalid_title() {
        for title in ["", "   ", "Show/Part", "Show\\Part"] {
            let result = config_from(&["-d", "/out", "-t", title, "-s", "1", "/in"]);
            assert!(
                matches!(result, Err(ConfigError::InvalidTitle { .. })),
                "title {title:?}"
            );
        }
    }

    #[test]
    fn test_exclusions_collected() {
        let config = config_from(&[
            "-d", "/out", "-t", "Show", "-s", "1", "-x", "2-3", "-x", "9", "/in",
        ])
        .unwrap();

        assert_eq!(config.exclusions.to_string(), "2-3,9");
        assert_eq!(config.exclusions.next_allowed(2), 4);
        assert_eq!(config.exclusions.next_allowed(9), 10);
    }
}
