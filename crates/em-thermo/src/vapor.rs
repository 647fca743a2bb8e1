//! Water vapor relations: saturation vapor pressure, mixing ratio, dewpoint.
//!
//! Saturation is taken over liquid water at every temperature.

use crate::constants::{BOLTON_A, BOLTON_B_K, BOLTON_C_K, EPSILON, WATER_ES_0C};
use em_core::units::ZERO_C_IN_K;

/// Saturation vapor pressure over water [Pa] at temperature `t_k` [K].
///
/// Bolton (1980): `es = 611.2 exp(17.67 (T - 273.15) / (T - 29.65))`.
/// The fit is good from roughly -80 degC to +50 degC.
#[inline]
pub fn saturation_vapor_pressure(t_k: f64) -> f64 {
    WATER_ES_0C * (BOLTON_A * (t_k - ZERO_C_IN_K) / (t_k - BOLTON_B_K)).exp()
}

/// Mixing ratio [kg/kg] of vapor pressure `e_pa` in air at pressure `p_pa`.
///
/// Has a pole at `p_pa == e_pa`.
#[inline]
pub fn mixing_ratio(p_pa: f64, e_pa: f64) -> f64 {
    EPSILON * e_pa / (p_pa - e_pa)
}

/// Vapor pressure [Pa] that gives mixing ratio `w` at pressure `p_pa`.
///
/// Inverse of [`mixing_ratio`] in `e`.
#[inline]
pub fn vapor_pressure_from_mixing_ratio(p_pa: f64, w: f64) -> f64 {
    p_pa * w / (EPSILON + w)
}

/// Dewpoint [K] for vapor pressure `e_pa` [Pa].
///
/// Algebraic inverse of [`saturation_vapor_pressure`]. Requires `e_pa > 0`.
#[inline]
pub fn dewpoint_from_vapor_pressure(e_pa: f64) -> f64 {
    let val = (e_pa / WATER_ES_0C).ln();
    BOLTON_C_K * val / (BOLTON_A - val) + ZERO_C_IN_K
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn es_positive_and_increasing(t in 233.15_f64..323.0_f64, dt in 0.01_f64..0.15_f64) {
            let lo = saturation_vapor_pressure(t);
            let hi = saturation_vapor_pressure(t + dt);
            prop_assert!(lo > 0.0);
            prop_assert!(hi > lo);
        }

        #[test]
        fn dewpoint_inverts_saturation(t in 213.15_f64..323.15_f64) {
            let td = dewpoint_from_vapor_pressure(saturation_vapor_pressure(t));
            prop_assert!((td - t).abs() < 1e-9, "t = {}, td = {}", t, td);
        }
    }
}
