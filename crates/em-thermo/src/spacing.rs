//! Evenly spaced sample generation.

/// `n` evenly spaced values from `a` to `b`, both ends included.
///
/// `n == 1` yields `[a]` and `n == 0` yields an empty vector. The end
/// points are exact; interior points use the weighted form
/// `(i b + (n - 1 - i) a) / (n - 1)`.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => return Vec::new(),
        1 => return vec![a],
        _ => {}
    }

    let last = n - 1;
    let span = last as f64;
    let mut points: Vec<f64> = (0..n)
        .map(|i| (i as f64 * b + (last - i) as f64 * a) / span)
        .collect();

    // Ensure exact endpoints
    points[0] = a;
    points[last] = b;
    points
}
