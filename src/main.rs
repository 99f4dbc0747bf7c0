//! mudlog-calc: recompute the derived block of a mudlog report record.
//!
//! Reads a report record as JSON, runs a full recompute, and prints the
//! derived figures as a text sheet or as JSON. This is the command-line
//! face of the export path: the record is always recomputed before its
//! derived fields are read, so stale values can never be exported.
//!
//! Usage:
//!   mudlog-calc report.json
//!   mudlog-calc report.json --json > updated.json
//!   MUDLOG_CONFIG=rig7.toml mudlog-calc report.json

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mudlog_engine::config::{self, EngineConfig};
use mudlog_engine::types::ReportRecord;

/// Recompute and print the derived figures of a mudlog report record.
#[derive(Parser)]
#[command(name = "mudlog-calc", version)]
struct Args {
    /// Path to the report record JSON.
    report: PathBuf,

    /// Emit the full updated record as JSON instead of a text sheet.
    #[arg(long)]
    json: bool,

    /// Engine config TOML (overrides the MUDLOG_CONFIG search order).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let engine_config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("failed to load engine config {}", path.display()))?,
        None => EngineConfig::load(),
    };
    config::init(engine_config);

    let raw = std::fs::read_to_string(&args.report)
        .with_context(|| format!("failed to read report {}", args.report.display()))?;
    let mut record: ReportRecord = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse report {}", args.report.display()))?;

    mudlog_engine::recompute_report(&mut record);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_sheet(&record);
    }

    Ok(())
}

fn print_sheet(record: &ReportRecord) {
    let d = &record.derived;

    if !record.well_name.is_empty() {
        println!("Well {}  report #{}", record.well_name, record.report_no);
    }
    println!("Hole diameter          {:>10.2} in", d.hole_diameter_in);
    println!("Nozzle area            {:>10.2} in2", d.nozzle_area_sqin);
    println!();
    println!("Total hole volume      {:>10.2} bbl", d.total_hole_volume);
    println!("Capacity volume        {:>10.2} bbl", d.capacity_volume);
    println!("Steel volume           {:>10.2} bbl", d.steel_volume);
    println!("Annulus volume         {:>10.2} bbl", d.annulus_volume);
    println!("Displace volume        {:>10.2} bbl", d.displace_volume);
    println!();
    println!("Pump output            {:>10.4} bbl/stk", d.pump_output_bbl_stk);
    println!("Lag volume             {:>10.2} bbl", d.lag_time_bbl);
    println!("Lag time               {:>10.2} min", d.lag_time_min);
    println!("Complete circulation   {:>10} strokes", d.complete_circulation_strokes);
    println!();
    println!("Annular velocity       {:>10.2} m/min", d.ann_velocity);
    println!("Jet velocity           {:>10.2} m/s", d.jet_velocity);
    println!("Bit HHP                {:>10.2} HP", d.bit_hhp);
    println!("HSI                    {:>10.2} HHP/in2", d.hsi);
    println!("Critical flow rate     {:>10.2} GPM", d.critical_flow_rate_gpm);
    println!();
    println!("Hydrostatic pressure   {:>10.2} psi", d.hydrostatic_pressure);
    println!("Annular pressure loss  {:>10.2} psi", d.annular_pressure_loss);
    println!("ECD                    {:>10.2} pcf", d.ecd);
    println!("EMW                    {:>10.2} pcf", d.emw);
    println!("MAMW                   {:>10.2} pcf", d.mamw);
    println!("Trip margin            {:>10.2} pcf", d.trip_margin);
}
