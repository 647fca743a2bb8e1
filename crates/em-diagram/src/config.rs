//! Baseline configuration.

use crate::{DiagramError, DiagramResult};
use em_core::ensure_finite;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Most pressure levels a baseline grid may have.
pub const MAX_PRESSURE_LEVELS: usize = 100_000;

/// Pressure grid and curve families of the diagram background.
///
/// Missing YAML keys fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BaselineConfig {
    /// Highest pressure of the grid, first level [hPa].
    pub bottom_hpa: f64,
    /// Lowest pressure bound [hPa], exclusive.
    pub top_hpa: f64,
    /// Grid spacing [hPa].
    pub step_hpa: f64,
    /// Level at which adiabats take their potential temperature [hPa].
    pub reference_hpa: f64,
    /// Potential temperatures of the dry and moist adiabats [K].
    pub thetas_k: Vec<f64>,
    /// Saturation mixing ratio lines [kg/kg].
    pub mixing_ratios: Vec<f64>,
    /// Mixing ratio lines are drawn only at or below this height [hPa].
    pub mixing_ratio_top_hpa: f64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            bottom_hpa: 1050.0,
            top_hpa: 90.0,
            step_hpa: 5.0,
            reference_hpa: 1000.0,
            thetas_k: (0..21).map(|i| 230.0 + 10.0 * f64::from(i)).collect(),
            mixing_ratios: vec![
                0.0004, 0.001, 0.002, 0.004, 0.007, 0.01, 0.016, 0.024, 0.032,
            ],
            mixing_ratio_top_hpa: 600.0,
        }
    }
}

impl BaselineConfig {
    /// Pressure levels from `bottom_hpa` toward `top_hpa` (exclusive).
    pub fn pressure_levels(&self) -> Vec<f64> {
        let count = ((self.bottom_hpa - self.top_hpa) / self.step_hpa).ceil();
        if !count.is_finite() || count <= 0.0 {
            return Vec::new();
        }
        (0..count as usize)
            .map(|i| self.bottom_hpa - i as f64 * self.step_hpa)
            .collect()
    }

    /// Levels on which mixing ratio lines are drawn.
    pub fn mixing_ratio_levels(&self) -> Vec<f64> {
        self.pressure_levels()
            .into_iter()
            .filter(|&p| p >= self.mixing_ratio_top_hpa)
            .collect()
    }

    pub fn validate(&self) -> DiagramResult<()> {
        ensure_finite(self.bottom_hpa, "bottom_hpa")?;
        ensure_finite(self.top_hpa, "top_hpa")?;
        ensure_finite(self.step_hpa, "step_hpa")?;
        ensure_finite(self.reference_hpa, "reference_hpa")?;
        ensure_finite(self.mixing_ratio_top_hpa, "mixing_ratio_top_hpa")?;

        if self.step_hpa <= 0.0 {
            return Err(invalid("step_hpa", self.step_hpa, "must be positive"));
        }
        if self.top_hpa < 0.0 {
            return Err(invalid("top_hpa", self.top_hpa, "must not be negative"));
        }
        if self.bottom_hpa <= self.top_hpa {
            return Err(invalid(
                "bottom_hpa",
                self.bottom_hpa,
                "must be greater than top_hpa",
            ));
        }
        let levels = ((self.bottom_hpa - self.top_hpa) / self.step_hpa).ceil();
        if levels > MAX_PRESSURE_LEVELS as f64 {
            return Err(invalid(
                "step_hpa",
                self.step_hpa,
                "grid would exceed the maximum number of pressure levels",
            ));
        }
        if self.reference_hpa <= 0.0 {
            return Err(invalid("reference_hpa", self.reference_hpa, "must be positive"));
        }

        if self.thetas_k.is_empty() {
            return Err(invalid_list("thetas_k", "must not be empty"));
        }
        for &theta in &self.thetas_k {
            ensure_finite(theta, "thetas_k")?;
            if theta <= 0.0 {
                return Err(invalid("thetas_k", theta, "absolute temperature must be > 0 K"));
            }
        }

        if self.mixing_ratios.is_empty() {
            return Err(invalid_list("mixing_ratios", "must not be empty"));
        }
        for &w in &self.mixing_ratios {
            ensure_finite(w, "mixing_ratios")?;
            if w <= 0.0 {
                return Err(invalid("mixing_ratios", w, "must be positive"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, value: f64, reason: &str) -> DiagramError {
    DiagramError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn invalid_list(field: &str, reason: &str) -> DiagramError {
    DiagramError::InvalidConfig {
        field: field.to_string(),
        value: "[]".to_string(),
        reason: reason.to_string(),
    }
}

pub fn load_yaml(path: &Path) -> DiagramResult<BaselineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: BaselineConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &BaselineConfig) -> DiagramResult<()> {
    config.validate()?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
