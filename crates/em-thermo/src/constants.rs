//! Meteorological constants.

/// Saturation vapor pressure over water at 0 degC [Pa].
pub const WATER_ES_0C: f64 = 611.2;

/// Gas constant of dry air [J/(K kg)].
pub const AIR_RD: f64 = 287.05;

/// Specific heat of dry air at constant pressure [J/(K kg)].
pub const AIR_CP_D: f64 = 1004.0;

/// Latent heat of vaporization at 0 degC [J/kg].
pub const WATER_LV_0C: f64 = 2.5e6;

/// Ratio of molecular weights, water vapor / dry air.
pub const EPSILON: f64 = 0.622;

/// Poisson exponent Rd / Cpd, rounded.
pub const KAPPA: f64 = 0.286;

/// Reference pressure for potential temperatures [Pa].
pub const P0_PA: f64 = 1.0e5;

/// Bolton (1980) fit coefficient for saturation vapor pressure.
pub const BOLTON_A: f64 = 17.67;

/// Bolton (1980) fit offset for saturation vapor pressure [K].
pub const BOLTON_B_K: f64 = 29.65;

/// Bolton (1980) fit offset used by the inverse (dewpoint) form [K].
///
/// Equal to `273.15 - BOLTON_B_K`, so the two fits are exact inverses.
pub const BOLTON_C_K: f64 = 243.5;

/// Pressure ratio of the reference integration step (800 hPa to 790 hPa).
///
/// The moist adiabat integrator never takes a sub-step whose pressure
/// ratio exceeds this.
pub const MOIST_STEP_RATIO: f64 = 800.0 / 790.0;
