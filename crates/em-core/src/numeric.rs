use crate::{EmError, EmResult};

/// Absolute + relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: f64, what: &'static str) -> EmResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EmError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimal places (half away from zero).
///
/// Non-finite input is returned unchanged.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_to_stays_within_half_step(v in -1.0e4_f64..1.0e4_f64) {
            prop_assert!((round_to(v, 2) - v).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1.0e3_f64..1.0e3_f64, b in -1.0e3_f64..1.0e3_f64) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
