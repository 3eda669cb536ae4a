use crate::config::parse_size;
use crate::episode::ExcludedRange;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "episodenamer")]
#[command(version)]
#[command(
    about = "Rename a season of episode files into a canonical naming scheme",
    long_about = None
)]
pub struct Cli {
    /// Destination directory for episodes
    #[arg(short, long, value_name = "DIR")]
    pub dest_dir: PathBuf,

    /// Title of the show
    #[arg(short, long)]
    pub title: String,

    /// Season number, used verbatim in file names
    #[arg(short, long)]
    pub season: String,

    /// Minimum size of an episode (bytes, or with a B/K/M/G suffix).
    /// Smaller files are treated as extras
    #[arg(short, long, value_name = "SIZE", default_value = "0", value_parser = parse_size)]
    pub min_size: u64,

    /// Directory where extras are placed. Required if --min-size is above zero
    #[arg(short, long, value_name = "DIR")]
    pub extras_dir: Option<PathBuf>,

    /// Missing episode numbers to skip, as N or N-M (repeatable, comma separated)
    #[arg(short = 'x', long, value_name = "RANGE", value_delimiter = ',')]
    pub missing: Vec<ExcludedRange>,

    /// Dry-run mode: print intended moves without executing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Source directories, processed in the order given
    #[arg(required = true, value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,
}
