/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to `dp` decimal places with ties going to the even neighbor.
pub fn round_half_even(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round_ties_even() / factor
}

/// Score rounding: two decimal places.
pub fn round2(value: f64) -> f64 {
    round_half_even(value, 2)
}

/// Percentage rounding: one decimal place.
pub fn round1(value: f64) -> f64 {
    round_half_even(value, 1)
}
