//! Save-to-sheet command - Write the Measurement Set into an existing workbook

use owo_colors::OwoColorize;

use crate::sheet::{update_workbook, SheetError, UpdateOptions, UpdateReport};

/// Execute the save-to-sheet command
///
/// Skipped keys are reported on stderr as they are met; the summary line
/// goes to stdout once the workbook is saved.
pub fn execute(options: &UpdateOptions) -> Result<UpdateReport, SheetError> {
    let report = update_workbook(options, |rejected| {
        eprintln!("{} {}", "Warning:".yellow(), rejected);
    })?;

    println!("{}", format_summary(&report));
    Ok(report)
}

/// One-line success summary
pub fn format_summary(report: &UpdateReport) -> String {
    format!(
        "Wrote {} list(s) to '{}' on sheet '{}', starting at row {}.",
        report.written,
        report.workbook.display(),
        report.sheet,
        report.start_row
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_summary() {
        let report = UpdateReport {
            workbook: PathBuf::from("results.xlsx"),
            sheet: "Sheet1".to_string(),
            start_row: 2,
            written: 2,
            skipped: 1,
        };
        assert_eq!(
            format_summary(&report),
            "Wrote 2 list(s) to 'results.xlsx' on sheet 'Sheet1', starting at row 2."
        );
    }
}
