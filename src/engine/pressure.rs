//! Pressure and density management
//!
//! Hydrostatic pressure, simplified annular pressure loss, equivalent
//! circulating density, SPP-implied equivalent mud weight, maximum
//! allowable mud weight, and trip margin. The APL and ECD correlations
//! are deliberately simplified approximations without a real rheological
//! basis; they reproduce the published formula sheet, not a Bingham or
//! power-law model.

use crate::engine::constants::{APL_DIVISOR, PCF_PER_PPG, PSI_PER_FT_PER_PPG};

/// Static hydrostatic pressure at TVD (psi): 0.052 × MW_ppg × TVD_ft.
pub fn hydrostatic_pressure(mud_weight_ppg: f64, tvd_ft: f64) -> f64 {
    if mud_weight_ppg <= 0.0 || tvd_ft <= 0.0 {
        return 0.0;
    }
    PSI_PER_FT_PER_PPG * mud_weight_ppg * tvd_ft
}

/// Simplified annular pressure loss (psi):
/// (MW_ppg × PV × GPM × TVD_ft) / 1,000,000.
pub fn annular_pressure_loss(mud_weight_ppg: f64, pv_cp: f64, flow_rate_gpm: f64, tvd_ft: f64) -> f64 {
    if mud_weight_ppg <= 0.0 || pv_cp <= 0.0 || flow_rate_gpm <= 0.0 || tvd_ft <= 0.0 {
        return 0.0;
    }
    (mud_weight_ppg * pv_cp * flow_rate_gpm * tvd_ft) / APL_DIVISOR
}

/// Equivalent circulating density (pcf).
///
/// While circulating, ECD_ppg = MW_ppg + APL / (0.052 × TVD_ft), converted
/// back to pcf. When any precondition fails (no depth, no mud, no APL) the
/// static mud weight is the ECD.
pub fn equivalent_circulating_density(
    mud_weight_pcf: f64,
    annular_pressure_loss_psi: f64,
    tvd_ft: f64,
) -> f64 {
    let mud_weight_ppg = mud_weight_pcf / PCF_PER_PPG;
    if tvd_ft > 0.0 && mud_weight_pcf > 0.0 && mud_weight_ppg > 0.0 && annular_pressure_loss_psi > 0.0
    {
        let ecd_ppg = mud_weight_ppg + annular_pressure_loss_psi / (PSI_PER_FT_PER_PPG * tvd_ft);
        ecd_ppg * PCF_PER_PPG
    } else {
        mud_weight_pcf
    }
}

/// Equivalent mud weight implied by standpipe pressure (pcf):
/// EMW_ppg = SPP / (0.052 × TVD_ft), converted to pcf.
pub fn equivalent_mud_weight(spp_psi: f64, tvd_ft: f64) -> f64 {
    if spp_psi <= 0.0 || tvd_ft <= 0.0 {
        return 0.0;
    }
    (spp_psi / (PSI_PER_FT_PER_PPG * tvd_ft)) * PCF_PER_PPG
}

/// Maximum allowable mud weight (pcf) at the configured fracture gradient.
///
/// Input-independent by design: the formula sheet fixes the fracture
/// gradient (0.8 psi/ft by default) rather than deriving it from a leak-off
/// test, so MAMW = (FG / 0.052) × 7.48 for every report.
pub fn max_allowable_mud_weight() -> f64 {
    let fracture_gradient = crate::config::get().assumptions.fracture_gradient_psi_ft;
    (fracture_gradient / PSI_PER_FT_PER_PPG) * PCF_PER_PPG
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

    const TVD_FT: f64 = 800.0 * 3.28084; // 2624.67 ft
    const MW_PPG: f64 = 65.0 / 7.48; // 8.69 ppg

    #[test]
    fn hydrostatic_reference_case() {
        let hp = hydrostatic_pressure(MW_PPG, TVD_FT);
        assert!((hp - 1186.0).abs() < 0.5, "got {hp}");
        assert!(hydrostatic_pressure(0.0, TVD_FT).abs() < 1e-12);
        assert!(hydrostatic_pressure(MW_PPG, 0.0).abs() < 1e-12);
    }

    #[test]
    fn apl_reference_case() {
        let apl = annular_pressure_loss(MW_PPG, 10.0, 120.0, TVD_FT);
        assert!((apl - 27.37).abs() < 0.05, "got {apl}");
        assert!(annular_pressure_loss(MW_PPG, 0.0, 120.0, TVD_FT).abs() < 1e-12);
    }

    #[test]
    fn ecd_adds_circulating_component() {
        let apl = annular_pressure_loss(MW_PPG, 10.0, 120.0, TVD_FT);
        let ecd = equivalent_circulating_density(65.0, apl, TVD_FT);
        assert!((ecd - 66.50).abs() < 0.05, "got {ecd}");
        assert!(ecd > 65.0);
    }

    #[test]
    fn ecd_is_static_mud_weight_without_circulation() {
        // No APL (pumps off): ECD degrades to the static value
        assert!((equivalent_circulating_density(65.0, 0.0, TVD_FT) - 65.0).abs() < 1e-12);
        // No depth: same
        assert!((equivalent_circulating_density(65.0, 25.0, 0.0) - 65.0).abs() < 1e-12);
        // No mud: zero, not NaN
        let ecd = equivalent_circulating_density(0.0, 25.0, TVD_FT);
        assert!(ecd.abs() < 1e-12);
        assert!(ecd.is_finite());
    }

    #[test]
    fn emw_reference_case() {
        let emw = equivalent_mud_weight(1000.0, TVD_FT);
        assert!((emw - 54.81).abs() < 0.05, "got {emw}");
        assert!(equivalent_mud_weight(0.0, TVD_FT).abs() < 1e-12);
        assert!(equivalent_mud_weight(1000.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn mamw_is_constant_across_inputs() {
        ensure_config();
        // (0.8 / 0.052) × 7.48 ≈ 115.08 pcf, independent of every input
        let mamw = max_allowable_mud_weight();
        assert!((mamw - 115.08).abs() < 0.01, "got {mamw}");
        assert!((max_allowable_mud_weight() - mamw).abs() < 1e-12);
    }
}
