//! Free-text geometry descriptor parsers
//!
//! Hole size and bit nozzles arrive from the form as an ad hoc
//! micro-grammar: hole size is either a plain decimal ("8.5") or a
//! whole-plus-fraction ("5 7/8"); nozzles are `-`-separated diameters in
//! 32nds of an inch ("12-12-12"). Both parsers are total: blank or
//! malformed input degrades to a configured fallback, never an error,
//! so a report stays renderable mid-edit.

use crate::engine::constants::NOZZLE_32NDS_DIVISOR;

/// Parse a hole-size descriptor into a diameter in inches.
///
/// Accepts a plain decimal ("8.5") or whole-plus-fraction form ("5 7/8",
/// fraction as `num/den`). Any parse failure, empty input, or non-positive
/// result yields the configured fallback (8.5 in by default).
pub fn parse_hole_diameter(text: &str) -> f64 {
    let fallback = crate::config::get().assumptions.fallback_hole_diameter_in;

    match parse_mixed_number(text) {
        Some(d) if d.is_finite() && d > 0.0 => d,
        _ => fallback,
    }
}

/// Parse "8.5" or "5 7/8" into inches. None on any malformed token.
fn parse_mixed_number(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [decimal] => decimal.parse::<f64>().ok(),
        [whole, fraction] => {
            let whole: f64 = whole.parse().ok()?;
            let (num, den) = fraction.split_once('/')?;
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            Some(whole + num / den)
        }
        _ => None,
    }
}

/// Parse a nozzle descriptor into total flow area in inches².
///
/// Splits on `-`, reads each token as an integer diameter in 32nds of an
/// inch, discards non-positive or non-numeric tokens, and computes
/// area = (π/4) × Σd² / 1024. Empty or fully unparseable input yields the
/// configured fallback (0.5 in² by default).
pub fn parse_nozzle_area(text: &str) -> f64 {
    let fallback = crate::config::get().assumptions.fallback_nozzle_area_sqin;

    // Squared and summed in f64: the descriptor is free text, and an
    // absurdly large token must widen, not overflow.
    let sum_of_squares: f64 = text
        .split('-')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .filter(|&d| d > 0)
        .map(|d| (d as f64) * (d as f64))
        .sum();

    if sum_of_squares <= 0.0 {
        return fallback;
    }

    (std::f64::consts::PI / 4.0) * (sum_of_squares / NOZZLE_32NDS_DIVISOR)
}
