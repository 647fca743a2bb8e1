//! `uom`-typed entry points.
//!
//! Thin wrappers over the f64 formulas for callers holding SI quantities.
//! Same numerical contract: nothing is validated.

use crate::theta::{equivalent_potential_temperature, saturation_equivalent_potential_temperature};
use crate::vapor;
use em_core::units::{Pressure, Ratio, Temperature, k, pa, to_k, to_pa, to_unitless, unitless};

/// Saturation vapor pressure over water.
pub fn saturation_vapor_pressure(t: Temperature) -> Pressure {
    pa(vapor::saturation_vapor_pressure(to_k(t)))
}

/// Mixing ratio of vapor pressure `e` in air at pressure `p`.
pub fn mixing_ratio(p: Pressure, e: Pressure) -> Ratio {
    unitless(vapor::mixing_ratio(to_pa(p), to_pa(e)))
}

/// Saturation mixing ratio at pressure `p` and temperature `t`.
pub fn saturation_mixing_ratio(p: Pressure, t: Temperature) -> Ratio {
    mixing_ratio(p, saturation_vapor_pressure(t))
}

/// Dewpoint for vapor pressure `e`.
pub fn dewpoint(e: Pressure) -> Temperature {
    k(vapor::dewpoint_from_vapor_pressure(to_pa(e)))
}

/// Dewpoint of air at pressure `p` holding mixing ratio `w`.
pub fn dewpoint_from_mixing_ratio(p: Pressure, w: Ratio) -> Temperature {
    let e = vapor::vapor_pressure_from_mixing_ratio(to_pa(p), to_unitless(w));
    k(vapor::dewpoint_from_vapor_pressure(e))
}

/// Equivalent potential temperature, reference 1000 hPa.
pub fn theta_e(p: Pressure, t: Temperature, td: Temperature) -> Temperature {
    k(equivalent_potential_temperature(to_pa(p), to_k(t), to_k(td)))
}

/// Saturation equivalent potential temperature, reference 1000 hPa.
pub fn theta_es(p: Pressure, t: Temperature) -> Temperature {
    k(saturation_equivalent_potential_temperature(to_pa(p), to_k(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theta::{calc_theta_e, calc_theta_es};
    use em_core::units::{degc, hpa};
    use em_core::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    #[test]
    fn typed_theta_matches_boundary_functions() {
        let typed = to_k(theta_e(hpa(850.0), degc(20.0), degc(10.0)));
        assert!(nearly_equal(typed, calc_theta_e(850.0, 20.0, 10.0), tol()));

        let typed = to_k(theta_es(hpa(1000.0), degc(20.0)));
        assert!(nearly_equal(typed, calc_theta_es(1000.0, 20.0), tol()));
    }

    #[test]
    fn saturation_roundtrip_through_dewpoint() {
        let t = k(288.15);
        let td = dewpoint(saturation_vapor_pressure(t));
        assert!(nearly_equal(to_k(td), 288.15, tol()));
    }

    #[test]
    fn saturation_mixing_ratio_recovers_temperature() {
        let p = hpa(900.0);
        let t = k(280.0);
        let w = saturation_mixing_ratio(p, t);
        assert!(to_unitless(w) > 0.0);
        let td = dewpoint_from_mixing_ratio(p, w);
        assert!(nearly_equal(to_k(td), 280.0, tol()));
    }
}
