//! Circulation volumetrics
//!
//! Hole, capacity, steel, annulus and displacement volumes from the two
//! geometry tables, plus pump output and circulation timing. All volumes
//! are in barrels; all functions are pure and total — a degenerate row or
//! a zero divisor contributes zero instead of erroring.

use crate::engine::constants::{CAPACITY_FACTOR, FT_PER_M, GAL_PER_BBL, PUMP_OUTPUT_FACTOR};
use crate::types::{StringSegment, WellProfileSegment};

/// Per-foot capacity of a circular bore of inner diameter `d` inches
/// (bbl/ft).
fn bore_capacity_bbl_per_ft(d_in: f64) -> f64 {
    d_in * d_in / CAPACITY_FACTOR
}

/// Total wellbore volume over all profile intervals (bbl).
///
/// An interval counts only when its inner diameter and its length are both
/// positive; an inverted interval (bottom above top) contributes zero.
pub fn total_hole_volume(profile: &[WellProfileSegment]) -> f64 {
    profile
        .iter()
        .map(|seg| {
            let length_ft = (seg.bottom_m - seg.top_m) * FT_PER_M;
            if seg.id_in > 0.0 && length_ft > 0.0 {
                bore_capacity_bbl_per_ft(seg.id_in) * length_ft
            } else {
                0.0
            }
        })
        .sum()
}

/// Capacity volume (inside the drill string) and steel volume
/// (displaced by the string metal), both in bbl.
///
/// Returned together because both walk the same table: capacity needs
/// `id > 0`, steel needs both diameters positive.
pub fn string_volumes(string: &[StringSegment]) -> (f64, f64) {
    let mut capacity = 0.0;
    let mut steel = 0.0;

    for seg in string {
        let length_ft = seg.length_m * FT_PER_M;

        if seg.id_in > 0.0 {
            capacity += bore_capacity_bbl_per_ft(seg.id_in) * length_ft;
        }
        if seg.id_in > 0.0 && seg.od_in > 0.0 {
            steel += ((seg.od_in * seg.od_in - seg.id_in * seg.id_in) / CAPACITY_FACTOR) * length_ft;
        }
    }

    (capacity, steel)
}

/// Triplex pump output per stroke (bbl/stroke).
///
/// 0.000243 × liner² × stroke × efficiency; zero unless both geometry
/// values are positive.
pub fn pump_output(liner_size_in: f64, stroke_length_in: f64) -> f64 {
    if liner_size_in <= 0.0 || stroke_length_in <= 0.0 {
        return 0.0;
    }

    let efficiency = crate::config::get().assumptions.pump_efficiency;
    PUMP_OUTPUT_FACTOR * liner_size_in * liner_size_in * stroke_length_in * efficiency
}

/// Lag time: minutes for mud to travel from the bit to surface through the
/// annulus. Zero when there is no flow.
pub fn lag_time_minutes(annulus_volume_bbl: f64, flow_rate_gpm: f64) -> f64 {
    let flow_bbl_per_min = flow_rate_gpm / GAL_PER_BBL;
    if flow_bbl_per_min > 0.0 {
        annulus_volume_bbl / flow_bbl_per_min
    } else {
        0.0
    }
}

/// Strokes for one complete circulation, surface to surface
/// (string capacity plus annulus), unrounded. Zero when the pump output
/// is zero; the publish step rounds to the nearest whole stroke.
pub fn circulation_strokes(
    capacity_volume_bbl: f64,
    annulus_volume_bbl: f64,
    pump_output_bbl_stk: f64,
) -> f64 {
    if pump_output_bbl_stk > 0.0 {
        (capacity_volume_bbl + annulus_volume_bbl) / pump_output_bbl_stk
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, EngineConfig};

    fn ensure_config() {
        if !config::is_initialized() {
            config::init(EngineConfig::default());
        }
    }

    fn open_hole(id_in: f64, top_m: f64, bottom_m: f64) -> WellProfileSegment {
        WellProfileSegment {
            kind: "Open Hole".to_string(),
            id_in,
            top_m,
            bottom_m,
        }
    }

    fn drill_pipe(id_in: f64, od_in: f64, length_m: f64) -> StringSegment {
        StringSegment {
            kind: "Drill Pipe".to_string(),
            id_in,
            od_in,
            weight_per_ft: 0.0,
            length_m,
        }
    }

    #[test]
    fn hole_volume_reference_case() {
        // 5.875" hole over 800 m: (5.875² / 1029.4) × (800 × 3.28084) ≈ 88.0 bbl
        let profile = vec![open_hole(5.875, 0.0, 800.0)];
        let vol = total_hole_volume(&profile);
        assert!((vol - 88.01).abs() < 0.1, "got {vol}");
    }

    #[test]
    fn inverted_and_zero_id_intervals_contribute_nothing() {
        let profile = vec![
            open_hole(5.875, 0.0, 800.0),
            open_hole(5.875, 900.0, 700.0), // inverted, not auto-corrected
            open_hole(0.0, 0.0, 500.0),     // no diameter
        ];
        let single = total_hole_volume(&profile[..1]);
        assert!((total_hole_volume(&profile) - single).abs() < 1e-12);
    }

    #[test]
    fn string_volumes_reference_case() {
        // 3.5" × 2.764" pipe over 800 m:
        // capacity = (2.764² / 1029.4) × 2624.67 ≈ 19.5 bbl
        // steel    = ((3.5² − 2.764²) / 1029.4) × 2624.67 ≈ 11.8 bbl
        let string = vec![drill_pipe(2.764, 3.5, 800.0)];
        let (capacity, steel) = string_volumes(&string);
        assert!((capacity - 19.48).abs() < 0.1, "got {capacity}");
        assert!((steel - 11.76).abs() < 0.1, "got {steel}");
    }

    #[test]
    fn growing_od_grows_steel_and_shrinks_annulus() {
        let hole = total_hole_volume(&[open_hole(8.5, 0.0, 1000.0)]);

        let (_, steel_a) = string_volumes(&[drill_pipe(2.764, 3.5, 1000.0)]);
        let (_, steel_b) = string_volumes(&[drill_pipe(2.764, 4.0, 1000.0)]);

        assert!(steel_b > steel_a);
        assert!(hole - steel_b < hole - steel_a);
    }

    #[test]
    fn pump_output_reference_case() {
        ensure_config();
        // 6.5" liner, 12" stroke: 0.000243 × 6.5² × 12 × 0.95 ≈ 0.1170 bbl/stk
        let out = pump_output(6.5, 12.0);
        assert!((out - 0.1170).abs() < 1e-3, "got {out}");
    }

    #[test]
    fn zero_pump_geometry_gives_zero_output_and_strokes() {
        ensure_config();
        assert!(pump_output(0.0, 12.0).abs() < 1e-12);
        assert!(pump_output(6.5, 0.0).abs() < 1e-12);
        let strokes = circulation_strokes(19.5, 76.3, 0.0);
        assert!(strokes.abs() < 1e-12);
        assert!(strokes.is_finite());
    }

    #[test]
    fn zero_flow_gives_zero_lag_time() {
        let lag = lag_time_minutes(76.3, 0.0);
        assert!(lag.abs() < 1e-12);
        assert!(lag.is_finite());
    }

    #[test]
    fn lag_time_reference_case() {
        // 76.3 bbl annulus at 120 GPM (2.857 bbl/min) ≈ 26.7 min
        let lag = lag_time_minutes(76.3, 120.0);
        assert!((lag - 26.7).abs() < 0.1, "got {lag}");
    }
}
