//! CLI commands

pub mod capture;
pub mod save_sheet;
