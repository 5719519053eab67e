//! Rounding to a fixed step size.

/// Round `input` to the nearest multiple of `step`.
///
/// - `0 < step < 1`: the step is treated as a decimal fraction; both sides are
///   scaled by ten before dividing so steps such as `0.25` land exactly.
/// - `step >= 1`: plain multiples of `step`.
/// - `step <= 0` (or NaN): falls back to the nearest integer and logs an error.
///
/// Ties round away from zero in every branch.
pub fn round_to_nearest_value(input: f32, step: f32) -> f32 {
    if step > 0.0 && step < 1.0 {
        let step = step * 10.0;
        ((input * 10.0) / step).round() * step / 10.0
    } else if step >= 1.0 {
        (input / step).round() * step
    } else {
        log::error!(
            "Invalid rounding step {step}, defaulted to nearest integer (input {input})"
        );
        input.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_steps() {
        assert_eq!(round_to_nearest_value(0.37, 0.25), 0.25);
        assert_eq!(round_to_nearest_value(0.4, 0.25), 0.5);
        assert_eq!(round_to_nearest_value(1.0, 0.25), 1.0);
        assert_eq!(round_to_nearest_value(2.9, 0.25), 3.0);
    }

    #[test]
    fn test_whole_steps() {
        assert_eq!(round_to_nearest_value(12.0, 5.0), 10.0);
        assert_eq!(round_to_nearest_value(13.0, 5.0), 15.0);
        assert_eq!(round_to_nearest_value(7.0, 1.0), 7.0);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_to_nearest_value(2.5, 1.0), 3.0);
        assert_eq!(round_to_nearest_value(-2.5, 1.0), -3.0);
        assert_eq!(round_to_nearest_value(7.5, 5.0), 10.0);
        assert_eq!(round_to_nearest_value(-7.5, 5.0), -10.0);
        assert_eq!(round_to_nearest_value(0.5, 0.5), 0.5);
    }

    #[test]
    fn test_invalid_step_rounds_to_integer() {
        assert_eq!(round_to_nearest_value(3.4, 0.0), 3.0);
        assert_eq!(round_to_nearest_value(3.5, -2.0), 4.0);
        assert_eq!(round_to_nearest_value(-3.5, 0.0), -4.0);
    }

    #[test]
    fn test_idempotent() {
        let steps = [0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 0.0];
        let inputs = [-7.3, -0.6, 0.0, 0.37, 0.4, 1.13, 2.875, 12.0, 13.0, 19.99];
        for &s in &steps {
            for &x in &inputs {
                let once = round_to_nearest_value(x, s);
                let twice = round_to_nearest_value(once, s);
                assert_eq!(once, twice, "x={x} step={s}");
            }
        }
    }
}
