//! Moist adiabatic lapse rate.

use crate::constants::{AIR_CP_D, AIR_RD, EPSILON, WATER_LV_0C};
use crate::vapor::{mixing_ratio, saturation_vapor_pressure};
use em_core::units::{PA_PER_HPA, c_to_k, hpa_to_pa};

/// Moist adiabatic lapse rate dT/dp [K/hPa] at `p_hpa` [hPa], `t_c` [degC].
///
/// Saturation mixing ratio is taken over water only; ice is not considered.
pub fn moist_lapse(p_hpa: f64, t_c: f64) -> f64 {
    let p_pa = hpa_to_pa(p_hpa);
    let t_k = c_to_k(t_c);
    let rs = mixing_ratio(p_pa, saturation_vapor_pressure(t_k));
    let numerator = (AIR_RD * t_k + WATER_LV_0C * rs) / p_pa;
    let denominator = AIR_CP_D + WATER_LV_0C * WATER_LV_0C * rs * EPSILON / (AIR_RD * t_k * t_k);
    numerator / denominator * PA_PER_HPA
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dry lapse rate dT/dp = Rd T / (Cp p), per hPa.
    fn dry_lapse(p_hpa: f64, t_c: f64) -> f64 {
        AIR_RD * c_to_k(t_c) / (AIR_CP_D * p_hpa)
    }

    #[test]
    fn known_values() {
        assert!((moist_lapse(1000.0, 20.0) - 0.036_231).abs() < 1e-5);
        assert!((moist_lapse(500.0, -20.0) - 0.114_703).abs() < 1e-5);
    }

    #[test]
    fn moist_rate_is_smaller_than_dry_rate() {
        for &(p, t) in &[(1000.0, 25.0), (850.0, 10.0), (500.0, -20.0), (300.0, -45.0)] {
            let moist = moist_lapse(p, t);
            assert!(moist > 0.0);
            assert!(moist < dry_lapse(p, t), "p = {p}, t = {t}");
        }
    }

    #[test]
    fn cold_air_approaches_dry_rate() {
        let ratio = moist_lapse(300.0, -60.0) / dry_lapse(300.0, -60.0);
        assert!(ratio > 0.95 && ratio < 1.0, "ratio = {ratio}");
    }
}
