//! Defaults and capture configuration

use anyhow::{bail, Result};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Data file both tools agree on, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "savaData.json";

/// First spreadsheet row written to (row 1 holds headers)
pub const DEFAULT_START_ROW: u32 = 2;

/// Section `k` lands in column `k + COLUMN_OFFSET` ("1" -> D)
pub const COLUMN_OFFSET: i64 = 3;

pub const DEFAULT_FIRST_SECTION: u32 = 4;
pub const DEFAULT_LAST_SECTION: u32 = 5;
pub const DEFAULT_TRIALS_PER_SECTION: usize = 6;

/// Calibration fudge factor applied to every raw interval; 1.0 records real time
pub const DEFAULT_SPEED_FACTOR: f64 = 0.5;

/// Settings for one stopwatch session
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfig {
    /// Section identifiers, visited in ascending order
    pub sections: RangeInclusive<u32>,
    /// Start/stop measurements taken per section
    pub trials_per_section: usize,
    /// Multiplier applied before rounding
    pub speed_factor: f64,
    /// Data file rewritten after every completed section
    pub output: PathBuf,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sections: DEFAULT_FIRST_SECTION..=DEFAULT_LAST_SECTION,
            trials_per_section: DEFAULT_TRIALS_PER_SECTION,
            speed_factor: DEFAULT_SPEED_FACTOR,
            output: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl CaptureConfig {
    /// Reject settings that would make the session meaningless
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            bail!(
                "Section range is empty: {} > {}",
                self.sections.start(),
                self.sections.end()
            );
        }
        if self.trials_per_section == 0 {
            bail!("Trials per section must be at least 1");
        }
        if !self.speed_factor.is_finite() || self.speed_factor <= 0.0 {
            bail!(
                "Speed factor must be a positive number, got {}",
                self.speed_factor
            );
        }
        Ok(())
    }
}
