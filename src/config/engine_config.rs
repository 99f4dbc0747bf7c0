//! Engine Configuration - Engineering assumptions as operator-tunable TOML values
//!
//! Every assumption baked into the simplified formula sheet is a field here.
//! Each struct implements `Default` with values matching the original
//! constants, ensuring zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Root configuration for a mudlog unit deployment.
///
/// Load with `EngineConfig::load()` which searches:
/// 1. `$MUDLOG_CONFIG` env var
/// 2. `./mudlog_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Unit / contract identification stamped onto new reports
    #[serde(default)]
    pub unit: UnitInfo,

    /// Engineering assumptions used by the calculation engine
    #[serde(default)]
    pub assumptions: AssumptionsConfig,
}

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$MUDLOG_CONFIG` environment variable
    /// 2. `./mudlog_config.toml` in the current working directory
    /// 3. Built-in defaults (original hardcoded values)
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("MUDLOG_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded engine config from MUDLOG_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from MUDLOG_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "MUDLOG_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./mudlog_config.toml
        let local = PathBuf::from("mudlog_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded engine config from ./mudlog_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./mudlog_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No mudlog_config.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the assumptions are physically meaningful.
    ///
    /// A config that passes validation can never make the engine produce
    /// NaN or Infinity: every tunable that appears in a denominator or
    /// as a fallback must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.assumptions;
        if !(a.pump_efficiency > 0.0 && a.pump_efficiency <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "assumptions.pump_efficiency",
                message: format!("must be in (0, 1], got {}", a.pump_efficiency),
            });
        }
        for (field, value) in [
            ("assumptions.fracture_gradient_psi_ft", a.fracture_gradient_psi_ft),
            ("assumptions.fallback_hole_diameter_in", a.fallback_hole_diameter_in),
            ("assumptions.fallback_nozzle_area_sqin", a.fallback_nozzle_area_sqin),
            ("assumptions.fallback_pipe_od_in", a.fallback_pipe_od_in),
            ("assumptions.drill_pipe_od_in", a.drill_pipe_od_in),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must be a positive finite number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Unit / contract identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Mudlogging unit identifier (e.g. "ML-07")
    #[serde(default)]
    pub ml_unit_id: String,

    /// Customer name stamped onto reports
    #[serde(default = "default_customer")]
    pub customer: String,

    /// Contractor name stamped onto reports
    #[serde(default = "default_contractor")]
    pub contractor: String,
}

fn default_customer() -> String {
    "NISOC".to_string()
}
fn default_contractor() -> String {
    "NIDC".to_string()
}

impl Default for UnitInfo {
    fn default() -> Self {
        Self {
            ml_unit_id: String::new(),
            customer: default_customer(),
            contractor: default_contractor(),
        }
    }
}

/// Engineering assumptions of the simplified formula sheet.
///
/// Defaults match the published formulas; override per deployment when a
/// rig runs non-standard pipe or a different fracture-gradient policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssumptionsConfig {
    /// Triplex pump volumetric efficiency (fraction, 0-1].
    #[serde(default = "default_pump_efficiency")]
    pub pump_efficiency: f64,

    /// Fracture gradient assumed for maximum allowable mud weight (psi/ft).
    #[serde(default = "default_fracture_gradient")]
    pub fracture_gradient_psi_ft: f64,

    /// Hole diameter used when the hole-size descriptor is blank or
    /// unparseable (inches).
    #[serde(default = "default_fallback_hole_diameter")]
    pub fallback_hole_diameter_in: f64,

    /// Total nozzle flow area used when the nozzle descriptor is blank or
    /// unparseable (inches²).
    #[serde(default = "default_fallback_nozzle_area")]
    pub fallback_nozzle_area_sqin: f64,

    /// Average pipe OD used for annular velocity when the drill-string
    /// table is empty (inches).
    #[serde(default = "default_fallback_pipe_od")]
    pub fallback_pipe_od_in: f64,

    /// Standard drill-pipe OD for the critical flow rate estimate (inches).
    #[serde(default = "default_drill_pipe_od")]
    pub drill_pipe_od_in: f64,
}

fn default_pump_efficiency() -> f64 {
    0.95
}
fn default_fracture_gradient() -> f64 {
    0.8
}
fn default_fallback_hole_diameter() -> f64 {
    8.5
}
fn default_fallback_nozzle_area() -> f64 {
    0.5
}
fn default_fallback_pipe_od() -> f64 {
    3.5
}
fn default_drill_pipe_od() -> f64 {
    5.0
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            pump_efficiency: default_pump_efficiency(),
            fracture_gradient_psi_ft: default_fracture_gradient(),
            fallback_hole_diameter_in: default_fallback_hole_diameter(),
            fallback_nozzle_area_sqin: default_fallback_nozzle_area(),
            fallback_pipe_od_in: default_fallback_pipe_od(),
            drill_pipe_od_in: default_drill_pipe_od(),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}
