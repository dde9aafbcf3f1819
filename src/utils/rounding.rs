//! Fixed-precision rounding for monetary and emission figures.

/// Magnitude past which an `f64` carries no fractional cents to round.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to two decimal places, ties to even.
///
/// Values too large to hold a cent fraction are returned unchanged so the
/// intermediate scaling cannot overflow.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(585.0), 585.0);
        assert_eq!(round2(47.800_000_000_000_004), 47.8);
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-2.344), -2.34);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(1.625), 1.62);
        assert_eq!(round2(1.375), 1.38);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(-1.625), -1.62);
    }

    #[test]
    fn test_round2_extreme_magnitudes_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-1e300), -1e300);
        assert!(round2(f64::MAX).is_finite());
    }
}
