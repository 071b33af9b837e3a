//! Measurement Set: section id -> ordered trial durations
//!
//! Serialized as a JSON object keyed by the stringified section id, e.g.
//! `{"4":[1.203,0.987],"5":[0.5]}`. Keys come out in ascending numeric order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Round to 3 decimal places (millisecond resolution)
///
/// Goes through the decimal formatter, which rounds the exact binary value and
/// sends exact ties to even: 0.0625 -> 0.062, 1.0005 (really 1.000499..) -> 1.0.
pub fn round_millis(seconds: f64) -> f64 {
    format!("{:.3}", seconds).parse().unwrap_or(seconds)
}

/// Convert a raw interval to the stored duration: scaled, then rounded
pub fn scaled_seconds(elapsed_nanos: u128, speed_factor: f64) -> f64 {
    round_millis(elapsed_nanos as f64 / NANOS_PER_SECOND * speed_factor)
}

/// Trial durations grouped by section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    sections: BTreeMap<u32, Vec<f64>>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a section with an empty trial list, discarding anything recorded under that id
    pub fn start_section(&mut self, section: u32) {
        self.sections.insert(section, Vec::new());
    }

    /// Append one duration to a section, after any earlier trials
    pub fn record(&mut self, section: u32, seconds: f64) {
        self.sections.entry(section).or_default().push(seconds);
    }

    pub fn trials(&self, section: u32) -> Option<&[f64]> {
        self.sections.get(&section).map(Vec::as_slice)
    }

    /// Sections with their trials, ascending by id
    pub fn sections(&self) -> impl Iterator<Item = (u32, &[f64])> {
        self.sections.iter().map(|(id, trials)| (*id, trials.as_slice()))
    }

    /// Overwrite `path` with the whole set
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }

    /// Read a set previously written by [`MeasurementSet::save`]
    #[cfg(test)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))
    }
}
