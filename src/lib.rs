//! trialsheet library
//!
//! Two small tools sharing one data file: a manual stopwatch that records
//! trial durations per section, and a writer that copies those durations
//! into columns of an existing Excel workbook.

pub mod commands;
pub mod config;
pub mod logging;
pub mod sheet;
pub mod timing;
