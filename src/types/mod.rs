//! Shared data structures for the daily mudlog report pipeline
//!
//! This module defines the core types around the calculation engine:
//! - `WellProfileSegment` / `StringSegment` — the two geometry tables
//! - `ReportInputs` — an immutable snapshot of everything the engine reads
//! - `CalculationResult` — the derived block the engine publishes
//! - `ReportRecord` — the host report the engine reads from and writes to

mod report;

pub use report::*;
