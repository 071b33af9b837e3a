//! Capture command - Interactive stopwatch over sections and trials

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io;

use crate::config::CaptureConfig;
use crate::timing::measurement::round_millis;
use crate::timing::{MeasurementSet, MonotonicClock, Session};

/// Execute the capture command
pub fn execute(config: &CaptureConfig) -> Result<()> {
    config.validate()?;

    println!(
        "Timing {} trial(s) for sections {}-{} (speed factor {})",
        config.trials_per_section,
        config.sections.start(),
        config.sections.end(),
        config.speed_factor
    );

    let stdin = io::stdin();
    let session = Session::new(config, stdin.lock(), io::stdout(), MonotonicClock::new());
    let measurements = session.run()?;

    println!();
    println!("{}", format_summary(&measurements));
    println!("{} {}", "Saved:".green(), config.output.display());

    Ok(())
}

/// Per-section table: trial count, total, and mean duration
pub fn format_summary(measurements: &MeasurementSet) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Section"),
        Cell::new("Trials"),
        Cell::new("Total (s)"),
        Cell::new("Mean (s)"),
    ]);

    for (section, trials) in measurements.sections() {
        let total: f64 = trials.iter().sum();
        let mean = if trials.is_empty() {
            "-".to_string()
        } else {
            format!("{:.3}", round_millis(total / trials.len() as f64))
        };

        table.add_row(vec![
            Cell::new(section),
            Cell::new(trials.len()),
            Cell::new(format!("{:.3}", round_millis(total))),
            Cell::new(mean),
        ]);
    }

    table.to_string()
}
