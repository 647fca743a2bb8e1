//! em-thermo: thermodynamics engine for emagram / skew-T diagrams.
//!
//! Provides:
//! - Saturation vapor pressure, mixing ratio and dewpoint (Bolton 1980 fits)
//! - Equivalent and saturation equivalent potential temperature
//! - Moist adiabatic lapse rate
//! - Curve generators for saturation mixing ratio lines, dry adiabats and
//!   moist adiabats
//! - `uom`-typed wrappers for callers working in SI quantities
//!
//! # Units
//!
//! The scalar building blocks work in SI (Pa, K). The public diagram-facing
//! functions (`calc_theta_e`, `calc_theta_es`, `moist_lapse` and every curve
//! generator) take hPa and degC and convert internally.
//!
//! # Numerical contract
//!
//! Nothing here validates its inputs. Out-of-domain arguments (for example
//! a vapor pressure at or above the ambient pressure) produce NaN or
//! infinities that propagate to the caller.
//!
//! # Example
//!
//! ```
//! use em_thermo::{calc_theta_es, moist_adiabatic_line};
//!
//! let theta_es = calc_theta_es(1000.0, 20.0);
//! assert!(theta_es > 330.0 && theta_es < 340.0);
//!
//! let curve = moist_adiabatic_line(&[1000.0, 850.0, 700.0, 500.0], 20.0);
//! assert_eq!(curve.len(), 4);
//! assert!(curve[3].t_c < curve[0].t_c);
//! ```

pub mod constants;
pub mod lapse;
pub mod lines;
pub mod spacing;
pub mod theta;
pub mod typed;
pub mod vapor;

// Re-exports for ergonomics
pub use lapse::moist_lapse;
pub use lines::{
    Curve, CurvePoint, MAX_SUB_STEPS, dry_adiabatic_line, dry_adiabatic_line_from,
    moist_adiabatic_line, moist_adiabatic_line_from, saturation_mixing_ratio_line,
};
pub use spacing::linspace;
pub use theta::{
    calc_theta_e, calc_theta_es, equivalent_potential_temperature,
    equivalent_potential_temperature_ref, saturation_equivalent_potential_temperature,
    saturation_equivalent_potential_temperature_ref,
};
pub use vapor::{
    dewpoint_from_vapor_pressure, mixing_ratio, saturation_vapor_pressure,
    vapor_pressure_from_mixing_ratio,
};
