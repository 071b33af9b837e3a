//! save-to-sheet: write the stopwatch lists into columns D, E, F, ... of a workbook
//!
//! Key "1" goes to column D, "2" to E, and so on. Each list is written top-down
//! from `--start-row`. The workbook is saved in place.

use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

use trialsheet::commands;
use trialsheet::config::{DEFAULT_DATA_FILE, DEFAULT_START_ROW};
use trialsheet::logging;
use trialsheet::sheet::columns::MAX_ROW;
use trialsheet::sheet::UpdateOptions;

#[derive(Parser)]
#[command(name = "save-to-sheet")]
#[command(about = "Write JSON lists into columns D/E/... of an existing xlsx file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to existing .xlsx workbook to update
    xlsx: PathBuf,

    /// Path to JSON file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    json: PathBuf,

    /// Worksheet name to write to (default: active sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Row to start writing at
    #[arg(
        long,
        default_value_t = DEFAULT_START_ROW,
        value_parser = clap::value_parser!(u32).range(1..=MAX_ROW as i64)
    )]
    start_row: u32,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let options = UpdateOptions {
        workbook: cli.xlsx,
        data: cli.json,
        sheet: cli.sheet,
        start_row: cli.start_row,
    };

    match commands::save_sheet::execute(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
