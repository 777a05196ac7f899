//! Numeric conversion helpers shared by seed composition and outcome math.

use num_traits::cast::cast;

/// Largest double that still represents every integer exactly (2^53).
const MAX_EXACT_INT_DOUBLE: f64 = 9_007_199_254_740_992.0;

/// Render a float the way dynamic-language string interpolation does:
/// integral values print without a decimal point (`20`, not `20.0`).
///
/// Seed keys embed the travel distance, so this formatting is part of the
/// determinism contract and must stay stable.
#[must_use]
pub fn js_number_string(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT_DOUBLE {
        let as_int = cast::<f64, i64>(value).unwrap_or(0);
        return as_int.to_string();
    }
    value.to_string()
}

/// Round a unit-interval chance to an integer percentage, clamped to [0, 100].
#[must_use]
pub fn unit_to_percent(chance: f64) -> u32 {
    if chance.is_nan() {
        return 0;
    }
    let scaled = (chance * 100.0).round().clamp(0.0, 100.0);
    cast::<f64, u32>(scaled).unwrap_or(0)
}

/// Round a f64 and clamp it to the i64 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i64>(clamped).unwrap_or(0)
}
