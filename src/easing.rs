/// Quadratic ease-in-out in the classic `(time, begin, change, duration)` form.
///
/// Accelerates over the first half of `duration` and decelerates over the second.
pub fn ease_in_out_quad(time: f64, begin: f64, change: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return begin + change;
    }

    let t = time / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + begin;
    }

    let t = t - 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + begin
}

/// Cubic ease-out over a progress fraction, `1 - (1 - p)^3`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}
