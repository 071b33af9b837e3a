//! Stopwatch session: measurement model, clock, and the interactive capture loop

pub mod capture;
pub mod clock;
pub mod measurement;

pub use capture::Session;
pub use clock::{Clock, MonotonicClock};
pub use measurement::MeasurementSet;
