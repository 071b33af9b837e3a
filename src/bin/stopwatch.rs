//! stopwatch: time trials by hand, section by section
//!
//! Press Enter to start and again to stop each trial. After every section the
//! data file is rewritten with everything recorded so far.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use trialsheet::commands;
use trialsheet::config::{
    CaptureConfig, DEFAULT_DATA_FILE, DEFAULT_FIRST_SECTION, DEFAULT_LAST_SECTION,
    DEFAULT_SPEED_FACTOR, DEFAULT_TRIALS_PER_SECTION,
};
use trialsheet::logging;

#[derive(Parser)]
#[command(name = "stopwatch")]
#[command(about = "Time trials by hand and save them per section", long_about = None)]
#[command(version)]
struct Cli {
    /// First section id
    #[arg(long, default_value_t = DEFAULT_FIRST_SECTION)]
    first_section: u32,

    /// Last section id (inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST_SECTION)]
    last_section: u32,

    /// Trials per section
    #[arg(short, long, default_value_t = DEFAULT_TRIALS_PER_SECTION)]
    trials: usize,

    /// Multiplier applied to every measured interval (1.0 for real time)
    #[arg(long, default_value_t = DEFAULT_SPEED_FACTOR)]
    speed_factor: f64,

    /// Data file to write, replaced on every run
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = CaptureConfig {
        sections: cli.first_section..=cli.last_section,
        trials_per_section: cli.trials,
        speed_factor: cli.speed_factor,
        output: cli.output,
    };

    commands::capture::execute(&config)
}
