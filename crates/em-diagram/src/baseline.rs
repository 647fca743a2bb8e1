//! Diagram background curves.
//!
//! The exported layout is what the plotting front-end reads: every curve is
//! a list of `[temperature_degC, pressure_hPa]` pairs, temperature rounded to
//! 0.01 and pressure an integer.

use crate::config::BaselineConfig;
use crate::DiagramResult;
use em_core::round_to;
use em_core::units::k_to_c;
use em_thermo::{
    Curve, dry_adiabatic_line_from, moist_adiabatic_line_from, saturation_mixing_ratio_line,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One exported point: `[t_degC, p_hPa]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselinePoint(pub f64, pub i64);

impl BaselinePoint {
    pub fn temperature_c(&self) -> f64 {
        self.0
    }

    pub fn pressure_hpa(&self) -> i64 {
        self.1
    }
}

/// Background curve families of an emagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub dryline: Vec<Vec<BaselinePoint>>,
    pub moistline: Vec<Vec<BaselinePoint>>,
    pub mixingratioline: Vec<Vec<BaselinePoint>>,
}

impl Baseline {
    /// Generate every family described by `config`.
    ///
    /// Dry and moist adiabats pass through `(reference_hpa, theta - 273.15)`.
    pub fn generate(config: &BaselineConfig) -> DiagramResult<Self> {
        config.validate()?;

        let levels = config.pressure_levels();
        let mixing_levels = config.mixing_ratio_levels();

        let dryline: Vec<_> = config
            .thetas_k
            .iter()
            .map(|&theta| {
                export(&dry_adiabatic_line_from(
                    &levels,
                    k_to_c(theta),
                    config.reference_hpa,
                ))
            })
            .collect();

        let moistline: Vec<_> = config
            .thetas_k
            .iter()
            .map(|&theta| {
                export(&moist_adiabatic_line_from(
                    &levels,
                    k_to_c(theta),
                    config.reference_hpa,
                ))
            })
            .collect();

        let mixingratioline: Vec<_> = config
            .mixing_ratios
            .iter()
            .map(|&w| export(&saturation_mixing_ratio_line(&mixing_levels, w)))
            .collect();

        tracing::debug!(
            levels = levels.len(),
            adiabats = config.thetas_k.len(),
            mixing_ratio_lines = mixingratioline.len(),
            "generated diagram baseline"
        );

        Ok(Self {
            dryline,
            moistline,
            mixingratioline,
        })
    }

    pub fn to_json(&self) -> DiagramResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn save_json(&self, path: &Path) -> DiagramResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> DiagramResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Convert a curve to the exported layout.
///
/// Points whose temperature is not finite cannot be drawn and are dropped.
fn export(curve: &Curve) -> Vec<BaselinePoint> {
    let points: Vec<_> = curve
        .iter()
        .filter(|pt| pt.t_c.is_finite())
        .map(|pt| BaselinePoint(round_to(pt.t_c, 2), pt.p_hpa.round() as i64))
        .collect();

    let dropped = curve.len() - points.len();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped non-finite baseline points");
    }
    points
}
