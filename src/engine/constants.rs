//! Unit-conversion constants used across the calculation engine.
//!
//! Every conversion factor lives here and nowhere else, so the volumetric,
//! hydraulic, and pressure modules cannot drift apart on units. Engineering
//! assumptions that an operator may tune (pump efficiency, fracture
//! gradient, parser fallbacks) are NOT constants — they live in
//! `config::AssumptionsConfig`.

/// Converts a squared diameter in inches² to barrels per foot of bore.
///
/// Derivation: 4 × 144 / (π × 5.6146), where 5.6146 is ft³ per barrel.
/// Usage: `capacity_bbl_per_ft = d_in² / CAPACITY_FACTOR`.
pub const CAPACITY_FACTOR: f64 = 1029.4;

/// Feet per metre. Geometry tables carry depths/lengths in metres;
/// all bbl/ft capacity math runs in feet.
pub const FT_PER_M: f64 = 3.28084;

/// Pounds-per-cubic-foot per pound-per-gallon (7.48 pcf = 1 ppg).
/// Mud weight is entered in pcf; the oilfield pressure formulas use ppg.
pub const PCF_PER_PPG: f64 = 7.48;

/// Hydrostatic gradient factor: psi per foot per ppg.
pub const PSI_PER_FT_PER_PPG: f64 = 0.052;

/// US gallons per barrel.
pub const GAL_PER_BBL: f64 = 42.0;

/// Triplex pump output factor: bbl/stroke = 0.000243 × liner² × stroke.
pub const PUMP_OUTPUT_FACTOR: f64 = 0.000243;

/// Bit hydraulic horsepower divisor: BHHP = GPM × psi / 1714.
pub const BHHP_DIVISOR: f64 = 1714.0;

/// Jet velocity factor: ft/s = 0.32 × GPM / nozzle-area-in².
pub const JET_VELOCITY_FACTOR: f64 = 0.32;

/// Metres per foot.
pub const M_PER_FT: f64 = 0.3048;

/// Litres per minute per US gallon per minute.
pub const LPM_PER_GPM: f64 = 3.785;

/// Square metres per square inch.
pub const SQM_PER_SQIN: f64 = 0.00064516;

/// Nozzle diameters are quoted in 32nds of an inch; summed squared
/// diameters are divided by 32² = 1024 to recover inches².
pub const NOZZLE_32NDS_DIVISOR: f64 = 1024.0;

/// Divisor of the simplified annular-pressure-loss correlation:
/// APL = (ppg × PV × GPM × ft) / 1,000,000.
pub const APL_DIVISOR: f64 = 1_000_000.0;
