//! Calculation Engine Module
//!
//! Deterministic drilling-fluid hydraulics and volumetrics for the daily
//! mudlog report. All math here is pure arithmetic - no I/O, no state.
//!
//! ## Pipeline
//! - `geometry` - free-text hole-size / nozzle descriptors to diameters and areas
//! - `volumetrics` - hole, capacity, steel, annulus, displacement volumes;
//!   pump output; lag time and circulation strokes
//! - `hydraulics` - annular velocity, jet velocity, BHHP, HSI, critical flow rate
//! - `pressure` - hydrostatic pressure, APL, ECD, EMW, MAMW, trip margin
//!
//! `compute()` runs the whole pipeline over one input snapshot and returns
//! the rounded derived block; `recompute_report()` publishes it back into
//! the host record. The engine is total: every degenerate input (missing,
//! zero, negative, unparseable) degrades to a documented default instead of
//! erroring, so a report stays renderable mid-edit.

pub mod constants;
pub mod geometry;
pub mod hydraulics;
pub mod pressure;
pub mod volumetrics;

pub use geometry::{parse_hole_diameter, parse_nozzle_area};

use crate::engine::constants::{FT_PER_M, PCF_PER_PPG};
use crate::types::{CalculationResult, ReportInputs, ReportRecord};

/// Round to 2 decimal places for published report fields.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places (pump output, quoted per stroke).
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Run the full calculation pipeline over one input snapshot.
///
/// Pure and idempotent: the same snapshot always produces a bit-identical
/// result. Values are rounded here, at the publish boundary; every
/// intermediate stays full precision so downstream figures (strokes, trip
/// margin) never accumulate rounding error.
pub fn compute(inputs: &ReportInputs) -> CalculationResult {
    // Geometry descriptors
    let hole_diameter = geometry::parse_hole_diameter(&inputs.hole_size);
    let nozzle_area = geometry::parse_nozzle_area(&inputs.nozzle);

    // Volumes
    let total_hole_volume = volumetrics::total_hole_volume(&inputs.well_profile);
    let (capacity_volume, steel_volume) = volumetrics::string_volumes(&inputs.string_data);
    let annulus_volume = total_hole_volume - steel_volume;
    let displace_volume = capacity_volume + steel_volume;

    // Circulation
    let pump_output = volumetrics::pump_output(inputs.liner_size_in, inputs.stroke_length_in);
    let lag_time_min = volumetrics::lag_time_minutes(annulus_volume, inputs.flow_rate_gpm);
    let strokes = volumetrics::circulation_strokes(capacity_volume, annulus_volume, pump_output);

    // Hydraulics
    let avg_pipe_od = hydraulics::average_pipe_od(&inputs.string_data);
    let ann_velocity = hydraulics::annular_velocity(inputs.flow_rate_gpm, hole_diameter, avg_pipe_od);
    let jet_velocity = hydraulics::jet_velocity(inputs.flow_rate_gpm, nozzle_area);
    let bit_hhp = hydraulics::bit_hydraulic_horsepower(inputs.flow_rate_gpm, inputs.spp_psi);
    let hsi = hydraulics::hydraulic_specific_index(bit_hhp, hole_diameter);

    // Pressure & density, in oilfield units (ppg, ft)
    let tvd_ft = inputs.tvd_m * FT_PER_M;
    let mud_weight_ppg = inputs.mud_weight_pcf / PCF_PER_PPG;
    let critical_flow_rate =
        hydraulics::critical_flow_rate(inputs.pv_cp, mud_weight_ppg, hole_diameter);
    let hydrostatic = pressure::hydrostatic_pressure(mud_weight_ppg, tvd_ft);
    let apl =
        pressure::annular_pressure_loss(mud_weight_ppg, inputs.pv_cp, inputs.flow_rate_gpm, tvd_ft);
    let ecd = pressure::equivalent_circulating_density(inputs.mud_weight_pcf, apl, tvd_ft);
    let emw = pressure::equivalent_mud_weight(inputs.spp_psi, tvd_ft);
    let mamw = pressure::max_allowable_mud_weight();
    let trip_margin = ecd - inputs.mud_weight_pcf;

    tracing::debug!(
        hole_diameter,
        total_hole_volume,
        annulus_volume,
        lag_time_min,
        ecd,
        "recompute complete"
    );

    CalculationResult {
        hole_diameter_in: round2(hole_diameter),
        nozzle_area_sqin: round2(nozzle_area),
        total_hole_volume: round2(total_hole_volume),
        capacity_volume: round2(capacity_volume),
        steel_volume: round2(steel_volume),
        annulus_volume: round2(annulus_volume),
        displace_volume: round2(displace_volume),
        pump_output_bbl_stk: round4(pump_output),
        lag_time_bbl: round2(annulus_volume),
        lag_time_min: round2(lag_time_min),
        complete_circulation_strokes: strokes.round() as i64,
        ann_velocity: round2(ann_velocity),
        jet_velocity: round2(jet_velocity),
        bit_hhp: round2(bit_hhp),
        hsi: round2(hsi),
        critical_flow_rate_gpm: round2(critical_flow_rate),
        hydrostatic_pressure: round2(hydrostatic),
        annular_pressure_loss: round2(apl),
        ecd: round2(ecd),
        emw: round2(emw),
        mamw: round2(mamw),
        trip_margin: round2(trip_margin),
    }
}

/// Recompute a report record in place: snapshot its inputs, run the
/// pipeline, overwrite the derived block.
///
/// Consumers that export or persist the record must call this (or go
/// through a `ReportSession`) before reading derived fields, so they never
/// see values computed from an older snapshot.
pub fn recompute_report(record: &mut ReportRecord) {
    record.derived = compute(&record.inputs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, EngineConfig};
    use crate::types::{StringSegment, WellProfileSegment};

    fn ensure_config() {
        if !config::is_initialized() {
            config::init(EngineConfig::default());
        }
    }

    fn reference_inputs() -> ReportInputs {
        ReportInputs {
            flow_rate_gpm: 120.0,
            mud_weight_pcf: 65.0,
            spp_psi: 1000.0,
            hole_size: "5 7/8".to_string(),
            nozzle: "12-12-12".to_string(),
            tvd_m: 800.0,
            pv_cp: 10.0,
            yp_lbf: 5.0,
            well_profile: vec![WellProfileSegment {
                kind: "Open Hole".to_string(),
                id_in: 5.875,
                top_m: 0.0,
                bottom_m: 800.0,
            }],
            string_data: vec![StringSegment {
                kind: "Drill Pipe".to_string(),
                id_in: 2.764,
                od_in: 3.5,
                weight_per_ft: 0.0,
                length_m: 800.0,
            }],
            ..ReportInputs::default()
        }
    }

    #[test]
    fn compute_is_idempotent() {
        ensure_config();
        let inputs = reference_inputs();
        assert_eq!(compute(&inputs), compute(&inputs));
    }

    #[test]
    fn empty_inputs_produce_finite_defaults() {
        ensure_config();
        let result = compute(&ReportInputs::default());

        // Everything degrades to zero or a named fallback - never NaN/Inf
        assert!((result.hole_diameter_in - 8.5).abs() < 1e-12);
        assert!((result.nozzle_area_sqin - 0.5).abs() < 1e-12);
        assert!(result.total_hole_volume.abs() < 1e-12);
        assert!(result.lag_time_min.abs() < 1e-12);
        assert_eq!(result.complete_circulation_strokes, 0);
        assert!(result.ann_velocity.abs() < 1e-12);
        assert!(result.ecd.abs() < 1e-12);
        assert!((result.mamw - 115.08).abs() < 0.01);

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null") && !json.contains("NaN"));
    }

    #[test]
    fn recompute_overwrites_only_the_derived_block() {
        ensure_config();
        let mut record = ReportRecord {
            well_name: "AZ-114".to_string(),
            inputs: reference_inputs(),
            ..ReportRecord::default()
        };
        record.derived.total_hole_volume = -1.0; // stale garbage

        recompute_report(&mut record);

        assert_eq!(record.well_name, "AZ-114");
        assert!((record.derived.total_hole_volume - 88.01).abs() < 0.1);
        assert_eq!(record.inputs, reference_inputs());
    }

    #[test]
    fn lag_volume_equals_annulus_volume() {
        ensure_config();
        let result = compute(&reference_inputs());
        assert!((result.lag_time_bbl - result.annulus_volume).abs() < 1e-12);
    }
}
