//! Interactive capture loop
//!
//! For every section the operator acknowledges a start and a stop per trial.
//! The whole Measurement Set is written to the data file each time a section
//! completes, so killing the process loses at most the section in progress.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use super::clock::Clock;
use super::measurement::{scaled_seconds, MeasurementSet};
use crate::config::CaptureConfig;

const START_PROMPT: &str = "hit Enter to start";
const STOP_PROMPT: &str = "hit Enter to stop";

/// One stopwatch run over the configured sections
pub struct Session<'a, R, W, C> {
    config: &'a CaptureConfig,
    input: R,
    output: W,
    clock: C,
    measurements: MeasurementSet,
}

impl<'a, R: BufRead, W: Write, C: Clock> Session<'a, R, W, C> {
    pub fn new(config: &'a CaptureConfig, input: R, output: W, clock: C) -> Self {
        Self {
            config,
            input,
            output,
            clock,
            measurements: MeasurementSet::new(),
        }
    }

    /// Run every section to completion and return what was recorded
    pub fn run(mut self) -> Result<MeasurementSet> {
        for section in self.config.sections.clone() {
            writeln!(self.output, "\nBegin section {}", section)?;
            self.measurements.start_section(section);

            for trial in 1..=self.config.trials_per_section {
                let seconds = self.measure_trial()?;
                // Shortest round-trip form, matching the stored value ("2.0", "1.203")
                writeln!(self.output, "time = {:?} s", seconds)?;
                self.measurements.record(section, seconds);
                tracing::debug!(section, trial, seconds, "trial recorded");
            }

            self.measurements
                .save(&self.config.output)
                .with_context(|| format!("Failed to save section {}", section))?;
            tracing::debug!(
                section,
                path = %self.config.output.display(),
                "section flushed"
            );
        }

        writeln!(self.output, "end program!")?;
        Ok(self.measurements)
    }

    fn measure_trial(&mut self) -> Result<f64> {
        self.acknowledge(START_PROMPT)?;
        let start = self.clock.now_nanos();
        self.acknowledge(STOP_PROMPT)?;
        let stop = self.clock.now_nanos();

        Ok(scaled_seconds(
            stop.saturating_sub(start),
            self.config.speed_factor,
        ))
    }

    /// Block until the operator presses Enter
    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            bail!("Input closed while waiting for \"{}\"", prompt);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    /// Hands out pre-recorded timestamps in order
    struct ScriptedClock(VecDeque<u128>);

    impl ScriptedClock {
        fn new(stamps: &[u128]) -> Self {
            Self(stamps.iter().copied().collect())
        }
    }

    impl Clock for ScriptedClock {
        fn now_nanos(&mut self) -> u128 {
            self.0.pop_front().expect("clock script exhausted")
        }
    }

    fn config(
        output: &Path,
        sections: std::ops::RangeInclusive<u32>,
        trials: usize,
    ) -> CaptureConfig {
        CaptureConfig {
            sections,
            trials_per_section: trials,
            speed_factor: 1.0,
            output: output.to_path_buf(),
        }
    }

    fn enters(count: usize) -> Cursor<Vec<u8>> {
        Cursor::new("\n".repeat(count).into_bytes())
    }

    #[test]
    fn test_two_second_interval_is_recorded_unscaled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let config = config(&path, 4..=4, 2);
        let clock = ScriptedClock::new(&[0, 1_000_000_000, 5_000_000_000, 7_000_000_000]);
        let mut out = Vec::new();

        let set = Session::new(&config, enters(4), &mut out, clock).run().unwrap();

        assert_eq!(set.trials(4), Some(&[1.0, 2.0][..]));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Begin section 4"));
        assert!(printed.contains("time = 1.0 s\n"));
        assert!(printed.contains("time = 2.0 s\n"));
        assert!(printed.ends_with("end program!\n"));
    }

    #[test]
    fn test_speed_factor_applied_before_rounding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut config = config(&path, 1..=1, 1);
        config.speed_factor = 0.5;
        let clock = ScriptedClock::new(&[100, 100 + 1_234_567_890]);
        let mut out = Vec::new();

        let set = Session::new(&config, enters(2), &mut out, clock).run().unwrap();

        assert_eq!(set.trials(1), Some(&[0.617][..]));
        assert!(String::from_utf8(out).unwrap().contains("time = 0.617 s"));
    }

    #[test]
    fn test_file_matches_result_after_full_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let config = config(&path, 4..=5, 1);
        let clock = ScriptedClock::new(&[0, 1_500_000_000, 0, 750_000_000]);
        let mut out = Vec::new();

        let set = Session::new(&config, enters(4), &mut out, clock).run().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"{"4":[1.5],"5":[0.75]}"#);
        assert_eq!(MeasurementSet::load(&path).unwrap(), set);
    }

    #[test]
    fn test_completed_sections_survive_closed_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let config = config(&path, 1..=2, 2);
        // Section 1 completes, section 2 gets one trial before input closes
        let clock = ScriptedClock::new(&[0, 1_000_000_000, 0, 2_000_000_000, 0, 3_000_000_000]);
        let mut out = Vec::new();

        let result = Session::new(&config, enters(6), &mut out, clock).run();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Input closed"));
        let saved = MeasurementSet::load(&path).unwrap();
        assert_eq!(saved.trials(1), Some(&[1.0, 2.0][..]));
        assert_eq!(saved.trials(2), None);
    }

    #[test]
    fn test_existing_file_is_replaced_not_merged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"1":[9.0],"4":[9.0,9.0]}"#).unwrap();
        let config = config(&path, 4..=4, 1);
        let clock = ScriptedClock::new(&[0, 1_000_000_000]);
        let mut out = Vec::new();

        Session::new(&config, enters(2), &mut out, clock).run().unwrap();

        let saved = MeasurementSet::load(&path).unwrap();
        assert_eq!(saved.trials(1), None);
        assert_eq!(saved.trials(4), Some(&[1.0][..]));
    }

    #[test]
    fn test_unwritable_output_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("data.json");
        let config = config(&path, 1..=1, 1);
        let clock = ScriptedClock::new(&[0, 1]);
        let mut out = Vec::new();

        let result = Session::new(&config, enters(2), &mut out, clock).run();
        assert!(result.is_err());
    }
}
