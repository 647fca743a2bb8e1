//! Reference curve generators for thermodynamic diagrams.
//!
//! Every generator takes pressure levels in hPa and returns one
//! [`CurvePoint`] per level, in the order given. Level ordering is not
//! checked.

use crate::constants::{KAPPA, MOIST_STEP_RATIO};
use crate::lapse::moist_lapse;
use crate::spacing::linspace;
use crate::vapor::{dewpoint_from_vapor_pressure, vapor_pressure_from_mixing_ratio};
use em_core::units::{c_to_k, hpa_to_pa, k_to_c};
use serde::{Deserialize, Serialize};
use std::iter;

/// A point on a thermodynamic diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Pressure [hPa]
    pub p_hpa: f64,
    /// Temperature [degC]
    pub t_c: f64,
}

impl CurvePoint {
    pub fn new(p_hpa: f64, t_c: f64) -> Self {
        Self { p_hpa, t_c }
    }
}

/// Ordered sequence of diagram points.
pub type Curve = Vec<CurvePoint>;

/// Line of constant saturation mixing ratio `w0` [kg/kg].
///
/// Each point is the dewpoint at which air at that pressure holds `w0`.
pub fn saturation_mixing_ratio_line(pressures: &[f64], w0: f64) -> Curve {
    pressures
        .iter()
        .map(|&p| {
            let e = vapor_pressure_from_mixing_ratio(hpa_to_pa(p), w0);
            CurvePoint::new(p, k_to_c(dewpoint_from_vapor_pressure(e)))
        })
        .collect()
}

/// Dry adiabat through `t0` [degC] at the first level.
pub fn dry_adiabatic_line(pressures: &[f64], t0: f64) -> Curve {
    match pressures.first() {
        Some(&p0) => dry_adiabatic_line_from(pressures, t0, p0),
        None => Vec::new(),
    }
}

/// Dry adiabat through (`p_ref` [hPa], `t_ref` [degC]), evaluated at every level.
///
/// `T(p) = (p / p_ref)^kappa * T_ref` in Kelvin. Written as an increment on
/// `t_ref` so that levels equal to `p_ref` return `t_ref` bit for bit.
pub fn dry_adiabatic_line_from(pressures: &[f64], t_ref: f64, p_ref: f64) -> Curve {
    let t_ref_k = c_to_k(t_ref);
    pressures
        .iter()
        .map(|&p| CurvePoint::new(p, t_ref + ((p / p_ref).powf(KAPPA) - 1.0) * t_ref_k))
        .collect()
}

/// Moist adiabat starting from `t0` [degC] at the first level.
///
/// Forward Euler integration of [`moist_lapse`] from level to level. Wide
/// intervals are split so that no sub-step spans a pressure ratio larger
/// than 800/790. Steps toward higher pressure are split the same way as
/// steps aloft, so descending lines differ from a scheme that only splits
/// ascending steps.
/// An interval needs at most [`MAX_SUB_STEPS`] sub-steps; beyond that (tops
/// far below 1 hPa) the ratio bound is given up to keep the work bounded.
/// The scheme is first order: the error still grows with the physical step,
/// mostly in the upper levels where dT/dp is largest.
pub fn moist_adiabatic_line(pressures: &[f64], t0: f64) -> Curve {
    let Some(&p_first) = pressures.first() else {
        return Vec::new();
    };

    let mut curve = Vec::with_capacity(pressures.len());
    curve.push(CurvePoint::new(p_first, t0));

    let mut t = t0;
    for pair in pressures.windows(2) {
        t = integrate_moist(pair[0], pair[1], t);
        curve.push(CurvePoint::new(pair[1], t));
    }
    curve
}

/// Moist adiabat through (`p_ref` [hPa], `t_ref` [degC]), evaluated at every level.
///
/// Integrates outward from the reference level, separately toward lower
/// and toward higher pressure, nearest levels first. Output follows the
/// caller's level order.
pub fn moist_adiabatic_line_from(pressures: &[f64], t_ref: f64, p_ref: f64) -> Curve {
    let (mut aloft, mut below): (Vec<usize>, Vec<usize>) =
        (0..pressures.len()).partition(|&i| pressures[i] < p_ref);
    aloft.sort_by(|&a, &b| pressures[b].total_cmp(&pressures[a]));
    below.sort_by(|&a, &b| pressures[a].total_cmp(&pressures[b]));

    let mut temps = vec![f64::NAN; pressures.len()];
    for side in [aloft, below] {
        let path: Vec<f64> = iter::once(p_ref)
            .chain(side.iter().map(|&i| pressures[i]))
            .collect();
        let line = moist_adiabatic_line(&path, t_ref);
        for (&i, point) in side.iter().zip(line.iter().skip(1)) {
            temps[i] = point.t_c;
        }
    }

    pressures
        .iter()
        .zip(temps)
        .map(|(&p, t)| CurvePoint::new(p, t))
        .collect()
}

fn integrate_moist(p_from: f64, p_to: f64, t: f64) -> f64 {
    sub_levels(p_from, p_to)
        .windows(2)
        .fold(t, |t, step| t + moist_lapse(step[0], t) * (step[1] - step[0]))
}

/// Upper bound on the sub-steps of one moist adiabat interval.
pub const MAX_SUB_STEPS: usize = 10_000;

/// Integration levels from `p_from` to `p_to`, both included.
///
/// A single step when the pair is within the reference ratio; otherwise the
/// fewest equal steps for which every step stays within it, capped at
/// [`MAX_SUB_STEPS`].
pub(crate) fn sub_levels(p_from: f64, p_to: f64) -> Vec<f64> {
    let log_step = (p_to.ln() - p_from.ln()).abs();
    // NaN compares false, so out-of-domain pressures take a single step.
    if !(log_step > MOIST_STEP_RATIO.ln()) {
        return vec![p_from, p_to];
    }

    let max_dp = p_from.min(p_to) * (MOIST_STEP_RATIO - 1.0);
    let steps = ((p_to - p_from).abs() / max_dp).ceil();
    if !steps.is_finite() {
        return vec![p_from, p_to];
    }
    let steps = if steps > MAX_SUB_STEPS as f64 {
        tracing::debug!(p_from, p_to, steps, "moist adiabat interval hit the sub-step cap");
        MAX_SUB_STEPS
    } else {
        steps as usize
    };

    tracing::trace!(p_from, p_to, steps, "subdividing moist adiabat interval");
    linspace(p_from, p_to, steps + 1)
}
