//! Curve generator integration tests.
//!
//! Reference values come from the closed-form formulas; integrated curves
//! are checked against much finer manual stepping.

use em_thermo::{
    CurvePoint, calc_theta_e, calc_theta_es, dry_adiabatic_line, moist_adiabatic_line,
    saturation_mixing_ratio_line,
};

fn standard_levels() -> Vec<f64> {
    vec![
        1000.0, 925.0, 850.0, 700.0, 500.0, 400.0, 300.0, 250.0, 200.0, 150.0, 100.0,
    ]
}

#[test]
fn single_jump_matches_fine_manual_stepping() {
    let coarse = moist_adiabatic_line(&[1000.0, 100.0], 20.0);

    // 0.1 hPa steps are below the subdivision threshold everywhere.
    let fine_levels: Vec<f64> = (0..=9000).map(|i| 1000.0 - i as f64 * 0.1).collect();
    let fine = moist_adiabatic_line(&fine_levels, 20.0);

    let t_coarse = coarse.last().unwrap().t_c;
    let t_fine = fine.last().unwrap().t_c;
    assert!(
        (t_coarse - t_fine).abs() < 0.5,
        "coarse = {t_coarse}, fine = {t_fine}"
    );
    assert!((t_coarse + 99.17).abs() < 0.05, "t = {t_coarse}");
}

#[test]
fn standard_levels_match_fine_manual_stepping() {
    let levels = standard_levels();
    let coarse = moist_adiabatic_line(&levels, 25.0);

    let mut fine_levels = Vec::new();
    for pair in levels.windows(2) {
        for i in 0..100 {
            fine_levels.push(pair[0] + (pair[1] - pair[0]) * i as f64 / 100.0);
        }
    }
    fine_levels.push(*levels.last().unwrap());
    let fine = moist_adiabatic_line(&fine_levels, 25.0);

    for (k, point) in coarse.iter().enumerate() {
        let reference = fine[k * 100];
        assert_eq!(point.p_hpa, reference.p_hpa);
        assert!(
            (point.t_c - reference.t_c).abs() < 1.0,
            "p = {}: {} vs {}",
            point.p_hpa,
            point.t_c,
            reference.t_c
        );
    }
}

#[test]
fn moist_adiabat_conserves_theta_es_approximately() {
    let levels = [1000.0, 900.0, 800.0, 700.0, 600.0];
    let curve = moist_adiabatic_line(&levels, 20.0);
    let theta0 = calc_theta_es(curve[0].p_hpa, curve[0].t_c);
    for point in &curve {
        let theta = calc_theta_es(point.p_hpa, point.t_c);
        assert!((theta - theta0).abs() < 3.0, "p = {}: {theta}", point.p_hpa);
    }
}

#[test]
fn dry_adiabat_conserves_theta_e_of_dry_air() {
    // Very dry air: theta-e reduces to potential temperature.
    let curve = dry_adiabatic_line(&[1000.0, 850.0, 700.0, 500.0], 30.0);
    let theta0 = calc_theta_e(1000.0, 30.0, -80.0);
    for point in &curve {
        let theta = calc_theta_e(point.p_hpa, point.t_c, -80.0);
        assert!((theta - theta0).abs() < 0.5, "p = {}: {theta}", point.p_hpa);
    }
}

#[test]
fn mixing_ratio_line_is_saturated_at_its_own_dewpoint() {
    let w0 = 0.010;
    let curve = saturation_mixing_ratio_line(&[1000.0, 900.0, 800.0], w0);
    for CurvePoint { p_hpa, t_c } in curve {
        let es = em_thermo::saturation_vapor_pressure(t_c + 273.15);
        let w = em_thermo::mixing_ratio(p_hpa * 100.0, es);
        assert!((w - w0).abs() < 1e-12, "p = {p_hpa}: w = {w}");
    }
}

#[test]
fn curves_follow_caller_level_order() {
    let levels = standard_levels();
    for curve in [
        dry_adiabatic_line(&levels, 20.0),
        moist_adiabatic_line(&levels, 20.0),
        saturation_mixing_ratio_line(&levels, 0.004),
    ] {
        let ps: Vec<f64> = curve.iter().map(|pt| pt.p_hpa).collect();
        assert_eq!(ps, levels);
    }
}

#[test]
fn near_vacuum_top_is_reached_with_bounded_work() {
    let curve = moist_adiabatic_line(&[1000.0, 500.0, 1e-3], 20.0);
    assert_eq!(curve.len(), 3);
    assert!(curve[1].t_c.is_finite());
    assert_eq!(curve[2].p_hpa, 1e-3);
}
