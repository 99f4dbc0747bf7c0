//! Mudlog Engine: Daily Drilling Report Calculations
//!
//! Drilling-fluid hydraulics and volumetrics for the daily mudlog report.
//!
//! ## Architecture
//!
//! - **Calculation Engine**: pure `compute(inputs) -> results` over well
//!   geometry, drill-string geometry, and fluid/pump parameters
//! - **Report Types**: the host record the engine reads from and publishes
//!   derived scalars back into
//! - **Session**: serialized recompute-then-read wrapper for the form,
//!   persistence and export collaborators
//! - **Config**: operator-tunable engineering assumptions (TOML)

pub mod config;
pub mod engine;
pub mod session;
pub mod types;

// Re-export engine configuration
pub use config::EngineConfig;

// Re-export commonly used types
pub use types::{
    CalculationResult, ReportInputs, ReportRecord, StringSegment, WellProfileSegment,
};

// Re-export the engine entry points
pub use engine::{compute, recompute_report};

// Re-export the session
pub use session::ReportSession;
