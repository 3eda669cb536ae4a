use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use episodenamer::{Cli, ConfigError, RenameConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout is reserved for dry-run output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match RenameConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => usage_error(&e),
    };

    tracing::info!(
        "Renaming '{}' season {} into {}",
        config.title,
        config.season,
        config.dest_dir.display()
    );
    if !config.exclusions.is_empty() {
        tracing::info!("Skipping missing episodes: {}", config.exclusions);
    }

    let result = episodenamer::run(&config).context("rename run aborted")?;

    if config.dry_run {
        tracing::info!("[DRY-RUN MODE] No files were actually moved");
    }
    tracing::info!(
        "Files processed: {} ({} episodes, {} extras, {} bytes)",
        result.files_moved(),
        result.episodes_moved,
        result.extras_moved,
        result.bytes_moved
    );

    Ok(())
}

fn usage_error(error: &ConfigError) -> ! {
    let kind = match error {
        ConfigError::MissingExtrasDir => ErrorKind::MissingRequiredArgument,
        _ => ErrorKind::ValueValidation,
    };
    Cli::command().error(kind, error).exit()
}
