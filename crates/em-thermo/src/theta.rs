//! Equivalent potential temperatures.
//!
//! Bolton-style approximation as used by JMA
//! (<https://www.data.jma.go.jp/add/suishin/jyouhou/pdf/371.pdf>).

use crate::constants::{KAPPA, P0_PA};
use crate::vapor::{mixing_ratio, saturation_vapor_pressure};
use em_core::units::{c_to_k, hpa_to_pa};

/// Temperature at the lifted condensation level [K] (Bolton 1980, eq. 15).
#[inline]
fn lcl_temperature(t_k: f64, td_k: f64) -> f64 {
    1.0 / (1.0 / (td_k - 56.0) + (t_k / td_k).ln() / 800.0) + 56.0
}

/// Latent heat release factor shared by both theta-e forms.
#[inline]
fn moisture_factor(t_k: f64, w: f64) -> f64 {
    ((3036.0 / t_k - 1.78) * w * (1.0 + 0.448 * w)).exp()
}

/// Equivalent potential temperature [K] with reference pressure 1000 hPa.
///
/// `p_pa` in Pa, `t_k` and `td_k` in K.
pub fn equivalent_potential_temperature(p_pa: f64, t_k: f64, td_k: f64) -> f64 {
    equivalent_potential_temperature_ref(p_pa, t_k, td_k, P0_PA)
}

/// Equivalent potential temperature [K] against reference pressure `p0_pa`.
pub fn equivalent_potential_temperature_ref(p_pa: f64, t_k: f64, td_k: f64, p0_pa: f64) -> f64 {
    let t_lcl = lcl_temperature(t_k, td_k);
    // Actual water content: vapor pressure is saturation at the dewpoint.
    let e = saturation_vapor_pressure(td_k);
    let w = mixing_ratio(p_pa, e);
    t_k * (p0_pa / (p_pa - e)).powf(KAPPA)
        * (t_k / t_lcl).powf(0.28 * w)
        * moisture_factor(t_lcl, w)
}

/// Saturation equivalent potential temperature [K], reference 1000 hPa.
///
/// Air is taken as saturated at `t_k`, so the LCL is the parcel itself.
pub fn saturation_equivalent_potential_temperature(p_pa: f64, t_k: f64) -> f64 {
    saturation_equivalent_potential_temperature_ref(p_pa, t_k, P0_PA)
}

/// Saturation equivalent potential temperature [K] against `p0_pa`.
pub fn saturation_equivalent_potential_temperature_ref(p_pa: f64, t_k: f64, p0_pa: f64) -> f64 {
    let es = saturation_vapor_pressure(t_k);
    let w = mixing_ratio(p_pa, es);
    t_k * (p0_pa / (p_pa - es)).powf(KAPPA) * moisture_factor(t_k, w)
}

/// Equivalent potential temperature [K] from `p_hpa` [hPa], `t_c` and `td_c` [degC].
pub fn calc_theta_e(p_hpa: f64, t_c: f64, td_c: f64) -> f64 {
    equivalent_potential_temperature(hpa_to_pa(p_hpa), c_to_k(t_c), c_to_k(td_c))
}

/// Saturation equivalent potential temperature [K] from `p_hpa` [hPa] and `t_c` [degC].
pub fn calc_theta_es(p_hpa: f64, t_c: f64) -> f64 {
    saturation_equivalent_potential_temperature(hpa_to_pa(p_hpa), c_to_k(t_c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theta_es_reference_value() {
        let theta_es = calc_theta_es(1000.0, 20.0);
        assert!((theta_es - 335.609).abs() < 1e-3, "theta_es = {theta_es}");
    }

    #[test]
    fn theta_e_at_850() {
        let theta_e = calc_theta_e(850.0, 20.0, 10.0);
        assert!((theta_e - 334.962).abs() < 1e-3, "theta_e = {theta_e}");
    }

    #[test]
    fn drier_air_has_lower_theta_e() {
        let moist = calc_theta_e(1000.0, 20.0, 18.0);
        let dry = calc_theta_e(1000.0, 20.0, 0.0);
        assert!(dry < moist);
    }

    #[test]
    fn lcl_of_saturated_parcel_is_parcel_temperature() {
        assert!((lcl_temperature(290.0, 290.0) - 290.0).abs() < 1e-9);
    }

    #[test]
    fn lcl_is_colder_than_dewpoint() {
        assert!(lcl_temperature(300.0, 285.0) < 285.0);
    }

    #[test]
    fn reference_pressure_scales_dry_part() {
        let base = saturation_equivalent_potential_temperature_ref(80_000.0, 270.0, P0_PA);
        let scaled = saturation_equivalent_potential_temperature_ref(80_000.0, 270.0, 2.0 * P0_PA);
        assert!((scaled / base - 2f64.powf(KAPPA)).abs() < 1e-12);
    }
}
