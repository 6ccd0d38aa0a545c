/// Floored floating-point remainder.
///
/// The result carries the sign of the divisor, so for a positive `y` it lies
/// in `[0, y)`. A zero divisor yields NaN.
pub fn remainder(x: f64, y: f64) -> f64 {
    let r = x % y;
    if r != 0.0 && ((r < 0.0) != (y < 0.0)) {
        r + y
    } else {
        r
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_positive_divisor() {
        assert_eq!(remainder(25.0, 10.0), 5.0);
        assert_eq!(remainder(-5.0, 10.0), 5.0);
        assert_eq!(remainder(-10.0, 10.0), 0.0);
        assert_eq!(remainder(20.0, 10.0), 0.0);
    }

    #[test]
    fn test_remainder_negative_divisor() {
        assert_eq!(remainder(5.0, -10.0), -5.0);
        assert_eq!(remainder(-5.0, -10.0), -5.0);
    }

    #[test]
    fn test_remainder_zero_divisor_is_nan() {
        assert!(remainder(3.0, 0.0).is_nan());
    }
}
