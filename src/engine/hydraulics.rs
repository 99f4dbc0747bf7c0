//! Bit and annulus hydraulics
//!
//! Annular velocity, jet velocity, bit hydraulic horsepower, hydraulic
//! specific index, and the simplified critical flow rate estimate. Guards
//! mirror the volumetrics module: any non-positive operand short-circuits
//! to zero.

use crate::engine::constants::{
    BHHP_DIVISOR, JET_VELOCITY_FACTOR, LPM_PER_GPM, M_PER_FT, SQM_PER_SQIN,
};
use crate::types::StringSegment;

/// Arithmetic mean OD of the drill-string components (inches).
///
/// Falls back to the configured standard pipe OD (3.5 in) when the string
/// table is empty.
pub fn average_pipe_od(string: &[StringSegment]) -> f64 {
    if string.is_empty() {
        return crate::config::get().assumptions.fallback_pipe_od_in;
    }
    string.iter().map(|seg| seg.od_in).sum::<f64>() / string.len() as f64
}

/// Annular velocity in m/min from flow rate and the hole/pipe area factor.
///
/// Zero when there is no flow or no positive annular area
/// (pipe as large as the hole).
pub fn annular_velocity(flow_rate_gpm: f64, hole_diameter_in: f64, avg_pipe_od_in: f64) -> f64 {
    let annular_area_factor =
        hole_diameter_in * hole_diameter_in - avg_pipe_od_in * avg_pipe_od_in;
    if annular_area_factor <= 0.0 || flow_rate_gpm <= 0.0 {
        return 0.0;
    }

    let flow_lpm = flow_rate_gpm * LPM_PER_GPM;
    let annular_area_sqm = annular_area_factor * SQM_PER_SQIN;
    (flow_lpm / annular_area_sqm) * 0.001
}

/// Jet velocity at the bit nozzles in m/s.
pub fn jet_velocity(flow_rate_gpm: f64, nozzle_area_sqin: f64) -> f64 {
    if flow_rate_gpm <= 0.0 || nozzle_area_sqin <= 0.0 {
        return 0.0;
    }

    let jv_ft_per_sec = JET_VELOCITY_FACTOR * (flow_rate_gpm / nozzle_area_sqin);
    jv_ft_per_sec * M_PER_FT
}

/// Bit hydraulic horsepower: GPM × SPP / 1714.
pub fn bit_hydraulic_horsepower(flow_rate_gpm: f64, spp_psi: f64) -> f64 {
    if flow_rate_gpm <= 0.0 || spp_psi <= 0.0 {
        return 0.0;
    }
    flow_rate_gpm * spp_psi / BHHP_DIVISOR
}

/// Hydraulic specific index: BHHP per square inch of bit area.
pub fn hydraulic_specific_index(bit_hhp: f64, hole_diameter_in: f64) -> f64 {
    if bit_hhp <= 0.0 || hole_diameter_in <= 0.0 {
        return 0.0;
    }
    bit_hhp / (hole_diameter_in * hole_diameter_in)
}

/// Simplified laminar-to-turbulent critical flow rate estimate (GPM).
///
/// Qc = 1000 × (PV / MW_ppg) × (Dh − Dp) / Dp against the configured
/// standard drill-pipe OD. Zero unless PV and mud weight are positive and
/// the hole is larger than the pipe.
pub fn critical_flow_rate(pv_cp: f64, mud_weight_ppg: f64, hole_diameter_in: f64) -> f64 {
    let pipe_od = crate::config::get().assumptions.drill_pipe_od_in;
    if pv_cp <= 0.0 || mud_weight_ppg <= 0.0 || hole_diameter_in <= pipe_od {
        return 0.0;
    }

    1000.0 * (pv_cp / mud_weight_ppg) * (hole_diameter_in - pipe_od) / pipe_od
}
