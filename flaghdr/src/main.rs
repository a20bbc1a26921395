use flaghdr::regenerate;
use libflaghdr::ASSETS;
use std::path::PathBuf;
use tracing::{info, Level};

use anyhow::Result;
use clap::Parser;

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

/// Regenerates the alpha flag headers (missable.h, progression.h, win-condition.h)
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Directory holding the source images, headers are written next to them
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    regenerate(&cli.directory, &ASSETS)?;
    info!("Regenerated {} headers", ASSETS.len());
    Ok(())
}
