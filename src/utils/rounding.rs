/// Round a value to `dp` decimal places (half away from zero).
///
/// Rounded figures are for presentation only and are never fed back into
/// further computation.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
