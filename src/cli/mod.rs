//! Command-line interface implementation
//!
//! Parses arguments, sets up logging and hands off to the batch runner.

mod sheet;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes (clap itself exits with 2 on malformed arguments)
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Gridsheet - pack a folder of images into a grid spritesheet
#[derive(Parser, Debug)]
#[command(name = "gridsheet")]
#[command(about = "Pack a folder of images (png, jpg, jpeg, bmp, gif) into a grid spritesheet PNG")]
#[command(version)]
pub struct Cli {
    /// Folder containing the source images [default: input]
    pub input: Option<PathBuf>,

    /// Spritesheet file to write [default: spritesheet.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gap in pixels between cells [default: 2]
    #[arg(short, long)]
    pub padding: Option<u32>,

    /// Number of threads used to decode images [default: 1]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Configuration file (default: nearest gridsheet.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load and lay out the images without writing the spritesheet
    #[arg(long)]
    pub dry_run: bool,

    /// Log every file, cell size and paste position
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Initialize the process-wide logger.
///
/// `RUST_LOG` is honored unless `--verbose` or `--quiet` picks the level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    sheet::run_sheet(&cli)
}
