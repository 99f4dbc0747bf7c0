//! Report record types
//!
//! All numeric inputs default to 0.0 on deserialization so a half-filled
//! report from the form layer is a valid (degenerate) input to the engine,
//! never a deserialization failure. The engine's guards turn those zeros
//! into documented zero/fallback outputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One casing/liner/open-hole interval of the well profile.
///
/// Contributes to hole volume only when `id_in > 0` and
/// `bottom_m - top_m > 0`. An inverted interval (`bottom_m < top_m`) is
/// not auto-corrected; it simply contributes zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellProfileSegment {
    /// Interval kind (e.g. "Casing", "Liner", "Open Hole")
    #[serde(default)]
    pub kind: String,
    /// Inner diameter (inches)
    #[serde(default)]
    pub id_in: f64,
    /// Top of interval (m)
    #[serde(default)]
    pub top_m: f64,
    /// Bottom of interval (m)
    #[serde(default)]
    pub bottom_m: f64,
}

/// One drill-string component (drill pipe, heavy-weight, collars).
///
/// Contributes to capacity volume when `id_in > 0`; contributes to steel
/// volume only when both `id_in > 0` and `od_in > 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringSegment {
    /// Component kind (e.g. "Drill Pipe", "HWDP", "Drill Collar")
    #[serde(default)]
    pub kind: String,
    /// Inner diameter (inches)
    #[serde(default)]
    pub id_in: f64,
    /// Outer diameter (inches)
    #[serde(default)]
    pub od_in: f64,
    /// Nominal weight (lb/ft)
    #[serde(default)]
    pub weight_per_ft: f64,
    /// Component length (m)
    #[serde(default)]
    pub length_m: f64,
}

/// Immutable snapshot of every field the calculation engine reads.
///
/// Produced from the report record at the start of a recompute; the engine
/// never sees the record mid-edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportInputs {
    /// Pump flow rate (GPM)
    #[serde(default)]
    pub flow_rate_gpm: f64,
    /// Mud weight (pcf)
    #[serde(default)]
    pub mud_weight_pcf: f64,
    /// Standpipe pressure (psi)
    #[serde(default)]
    pub spp_psi: f64,
    /// Hole-size descriptor, free text (e.g. "8.5" or "5 7/8")
    #[serde(default)]
    pub hole_size: String,
    /// Nozzle descriptor, free text in 32nds (e.g. "12-12-12")
    #[serde(default)]
    pub nozzle: String,
    /// True vertical depth (m)
    #[serde(default)]
    pub tvd_m: f64,
    /// Plastic viscosity (cp)
    #[serde(default)]
    pub pv_cp: f64,
    /// Yield point (lbf/100ft²)
    #[serde(default)]
    pub yp_lbf: f64,
    /// Pump liner size (inches)
    #[serde(default)]
    pub liner_size_in: f64,
    /// Pump stroke length (inches)
    #[serde(default)]
    pub stroke_length_in: f64,
    /// 600-rpm rheometer dial reading
    #[serde(default)]
    pub rheology_600: f64,
    /// 300-rpm rheometer dial reading
    #[serde(default)]
    pub rheology_300: f64,

    /// Well profile geometry table (~10 rows max in practice)
    #[serde(default)]
    pub well_profile: Vec<WellProfileSegment>,
    /// Drill-string geometry table (~10 rows max in practice)
    #[serde(default)]
    pub string_data: Vec<StringSegment>,
}

/// Derived scalars published back into the report record.
///
/// Purely derived — recomputed in full on every input change and
/// overwritten in place. All fields are rounded to 2 decimal places except
/// `complete_circulation_strokes` (nearest whole stroke) and
/// `pump_output_bbl_stk` (4 decimals, the precision pump cards quote).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // === Parsed geometry echo ===
    /// Hole diameter resolved from the free-text descriptor (inches)
    #[serde(default)]
    pub hole_diameter_in: f64,
    /// Total nozzle flow area resolved from the descriptor (inches²)
    #[serde(default)]
    pub nozzle_area_sqin: f64,

    // === Volumes (bbl) ===
    /// Total wellbore volume over all profile intervals
    #[serde(default)]
    pub total_hole_volume: f64,
    /// Fluid volume inside the drill string
    #[serde(default)]
    pub capacity_volume: f64,
    /// Volume displaced by the drill-string metal
    #[serde(default)]
    pub steel_volume: f64,
    /// Open annular volume (hole minus steel)
    #[serde(default)]
    pub annulus_volume: f64,
    /// Displacement volume (capacity plus steel)
    #[serde(default)]
    pub displace_volume: f64,

    // === Circulation ===
    /// Pump output (bbl/stroke)
    #[serde(default)]
    pub pump_output_bbl_stk: f64,
    /// Lag volume, bit to surface through the annulus (bbl)
    #[serde(default)]
    pub lag_time_bbl: f64,
    /// Lag time, bit to surface through the annulus (min)
    #[serde(default)]
    pub lag_time_min: f64,
    /// Strokes for one complete circulation (surface to surface)
    #[serde(default)]
    pub complete_circulation_strokes: i64,

    // === Hydraulics ===
    /// Annular velocity (m/min)
    #[serde(default)]
    pub ann_velocity: f64,
    /// Jet velocity at the bit nozzles (m/s)
    #[serde(default)]
    pub jet_velocity: f64,
    /// Bit hydraulic horsepower (HP)
    #[serde(default)]
    pub bit_hhp: f64,
    /// Hydraulic specific index (HHP/inch²)
    #[serde(default)]
    pub hsi: f64,
    /// Estimated laminar-to-turbulent critical flow rate (GPM)
    #[serde(default)]
    pub critical_flow_rate_gpm: f64,

    // === Pressure & density management ===
    /// Static hydrostatic pressure at TVD (psi)
    #[serde(default)]
    pub hydrostatic_pressure: f64,
    /// Simplified annular pressure loss (psi)
    #[serde(default)]
    pub annular_pressure_loss: f64,
    /// Equivalent circulating density (pcf)
    #[serde(default)]
    pub ecd: f64,
    /// Equivalent mud weight implied by SPP (pcf)
    #[serde(default)]
    pub emw: f64,
    /// Maximum allowable mud weight at the assumed fracture gradient (pcf)
    #[serde(default)]
    pub mamw: f64,
    /// Trip margin, ECD minus static mud weight (pcf)
    #[serde(default)]
    pub trip_margin: f64,
}

/// One daily mudlog report.
///
/// The engine reads `inputs` and overwrites `derived`; everything else is
/// carried for the form, persistence and export collaborators and never
/// touched by a recompute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Report date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Sequential report number for the well
    #[serde(default)]
    pub report_no: u32,
    #[serde(default)]
    pub well_name: String,
    #[serde(default)]
    pub field_name: String,
    #[serde(default)]
    pub rig_name: String,
    /// Customer name (stamped from config for new reports)
    #[serde(default)]
    pub customer: String,
    /// Contractor name (stamped from config for new reports)
    #[serde(default)]
    pub contractor: String,

    /// Everything the calculation engine reads
    #[serde(default)]
    pub inputs: ReportInputs,

    /// Everything the calculation engine writes
    #[serde(default)]
    pub derived: CalculationResult,
}

impl ReportRecord {
    /// Create an empty report stamped with the configured unit identity.
    pub fn new_for_unit(config: &crate::config::EngineConfig) -> Self {
        Self {
            customer: config.unit.customer.clone(),
            contractor: config.unit.contractor.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_filled_report_deserializes_with_zero_inputs() {
        // The form layer saves partial records constantly; missing numeric
        // fields must come back as 0.0, not as errors.
        let raw = r#"{
            "well_name": "AZ-114",
            "inputs": {
                "flow_rate_gpm": 120.0,
                "well_profile": [{"kind": "Open Hole", "id_in": 5.875}]
            }
        }"#;

        let record: ReportRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.well_name, "AZ-114");
        assert!((record.inputs.flow_rate_gpm - 120.0).abs() < 1e-12);
        assert!((record.inputs.mud_weight_pcf).abs() < 1e-12);
        assert!((record.inputs.well_profile[0].bottom_m).abs() < 1e-12);
        assert!(record.inputs.string_data.is_empty());
    }

    #[test]
    fn derived_block_round_trips_through_json() {
        let mut record = ReportRecord::default();
        record.derived.total_hole_volume = 88.01;
        record.derived.complete_circulation_strokes = 8155;

        let json = serde_json::to_string(&record).unwrap();
        let back: ReportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
