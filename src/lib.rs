#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod classifier;
pub mod cli;
pub mod config;
pub mod episode;
pub mod error;
pub mod executor;
pub mod file;
pub mod mover;
pub mod naming;
pub mod plan;
pub mod scanner;

pub use classifier::{Classification, classify};
pub use cli::Cli;
pub use config::{ConfigError, RenameConfig, parse_size};
pub use episode::{EpisodeNumber, ExcludedRange, Exclusions};
pub use error::{AppError, Result};
pub use executor::{ExecutionResult, Executor};
pub use file::SourceFile;
pub use mover::{DryRunMover, Mover, RenameMover};
pub use naming::{episode_file_name, extra_file_name, resolve_extra_number};
pub use plan::{Assignment, AssignmentKind, RenamePlan};
pub use scanner::{collect_source_files, list_directory};

/// Scans, classifies and plans, without touching anything on disk.
pub fn plan_run(config: &RenameConfig) -> Result<RenamePlan> {
    let files = collect_source_files(&config.source_dirs)?;
    tracing::info!(
        "Found {} files in {} directories",
        files.len(),
        config.source_dirs.len()
    );

    let classification = classify(files, config.min_size, &config.exclusions)?;
    tracing::info!(
        "Classified {} episodes and {} extras",
        classification.episodes.len(),
        classification.extras.len()
    );

    RenamePlan::build(classification, config)
}

/// Full run: plan, then move (or print, in dry-run mode).
pub fn run(config: &RenameConfig) -> Result<ExecutionResult> {
    let plan = plan_run(config)?;

    let mover: Box<dyn Mover> = if config.dry_run {
        tracing::info!("Dry-run mode: using DryRunMover");
        Box::new(DryRunMover)
    } else {
        Box::new(RenameMover)
    };

    Executor::execute_plan(&plan, mover.as_ref(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const MIB: u64 = 1024 * 1024;

    fn sized_file(path: &Path, size: u64) {
        File::create(path).unwrap().set_len(size).unwrap();
    }

    fn config(root: &Path, min_size: u64, missing: &[&str]) -> RenameConfig {
        RenameConfig {
            dest_dir: root.join("Show/Season 1"),
            title: "Show".to_string(),
            season: "1".to_string(),
            min_size,
            extras_dir: Some(root.join("Show/Extras")),
            exclusions: Exclusions::new(missing.iter().map(|m| m.parse().unwrap()).collect()),
            dry_run: false,
            source_dirs: vec![root.join("disc1"), root.join("disc2")],
        }
    }

    fn setup_discs(root: &Path) {
        let disc1 = root.join("disc1");
        let disc2 = root.join("disc2");
        fs::create_dir(&disc1).unwrap();
        fs::create_dir(&disc2).unwrap();
        sized_file(&disc1.join("t01.mkv"), 900 * MIB);
        sized_file(&disc1.join("t02.nfo"), 2048);
        sized_file(&disc1.join("t03.mkv"), 800 * MIB);
        sized_file(&disc2.join("t01.mkv"), 850 * MIB);
        sized_file(&disc2.join("t02.mkv"), 5 * MIB);
    }

    fn sorted_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_plan_single_episode_and_extra() {
        let temp_dir = TempDir::new().unwrap();
        let disc = temp_dir.path().join("disc1");
        fs::create_dir(&disc).unwrap();
        sized_file(&disc.join("a.mkv"), 900 * MIB);
        sized_file(&disc.join("b.nfo"), 2048);

        let mut config = config(temp_dir.path(), parse_size("100M").unwrap(), &[]);
        config.source_dirs = vec![disc.clone()];

        let plan = plan_run(&config).unwrap();

        assert_eq!(plan.assignments.len(), 2);
        assert_eq!(plan.assignments[0].source.path, disc.join("a.mkv"));
        assert_eq!(plan.assignments[0].kind, AssignmentKind::Episode(1));
        assert_eq!(plan.assignments[1].source.path, disc.join("b.nfo"));
        assert_eq!(plan.assignments[1].kind, AssignmentKind::Extra(1));
    }

    #[test]
    fn test_run_moves_across_directories() {
        let temp_dir = TempDir::new().unwrap();
        setup_discs(temp_dir.path());
        let config = config(temp_dir.path(), 100 * MIB, &["2"]);

        let result = run(&config).unwrap();

        assert_eq!(result.episodes_moved, 3);
        assert_eq!(result.extras_moved, 2);
        assert_eq!(
            sorted_names(&config.dest_dir),
            vec!["Show S1E1.mkv", "Show S1E3.mkv", "Show S1E4.mkv"]
        );
        assert_eq!(
            sorted_names(config.extras_dir.as_deref().unwrap()),
            vec!["Show Extra 1.nfo", "Show Extra 2.mkv"]
        );
        // Directory order decides numbering: disc2/t01 is episode 4
        let fourth = fs::metadata(config.dest_dir.join("Show S1E4.mkv")).unwrap();
        assert_eq!(fourth.len(), 850 * MIB);
        assert!(sorted_names(&temp_dir.path().join("disc1")).is_empty());
    }

    #[test]
    fn test_second_run_continues_extra_numbering() {
        let temp_dir = TempDir::new().unwrap();
        let config = config(temp_dir.path(), 100, &[]);
        let extras_dir = config.extras_dir.clone().unwrap();
        fs::create_dir(temp_dir.path().join("disc1")).unwrap();
        fs::create_dir(temp_dir.path().join("disc2")).unwrap();

        sized_file(&temp_dir.path().join("disc1/menu.png"), 10);
        run(&config).unwrap();
        assert_eq!(sorted_names(&extras_dir), vec!["Show Extra 1.png"]);

        sized_file(&temp_dir.path().join("disc2/trailer.mp4"), 10);
        run(&config).unwrap();
        assert_eq!(
            sorted_names(&extras_dir),
            vec!["Show Extra 1.png", "Show Extra 2.mp4"]
        );
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        setup_discs(temp_dir.path());
        let mut config = config(temp_dir.path(), 100 * MIB, &[]);
        config.dry_run = true;

        let before: Vec<PathBuf> = ["disc1", "disc2"]
            .iter()
            .flat_map(|d| sorted_names(&temp_dir.path().join(d)))
            .map(PathBuf::from)
            .collect();

        let result = run(&config).unwrap();

        assert_eq!(result.files_moved(), 5);
        assert!(!temp_dir.path().join("Show").exists());
        let after: Vec<PathBuf> = ["disc1", "disc2"]
            .iter()
            .flat_map(|d| sorted_names(&temp_dir.path().join(d)))
            .map(PathBuf::from)
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_unreadable_source_dir_aborts_before_moving() {
        let temp_dir = TempDir::new().unwrap();
        setup_discs(temp_dir.path());
        let mut config = config(temp_dir.path(), 100 * MIB, &[]);
        config.source_dirs.push(temp_dir.path().join("missing"));

        let result = run(&config);

        assert!(matches!(result, Err(AppError::ReadDir { .. })));
        assert!(!temp_dir.path().join("Show").exists());
        assert!(temp_dir.path().join("disc1/t01.mkv").exists());
    }
}
