//! Cost and confidence estimation
//!
//! Both estimates are functions of the selected-function count alone.

use rand::Rng;

/// Estimate execution time in seconds for `n` selected functions
///
/// `n * 2` plus uniform jitter in `[0, 5)`, rounded to one decimal place.
/// Monotonically non-decreasing in `n` up to jitter.
#[must_use]
pub fn estimate_time<R: Rng>(n: usize, rng: &mut R) -> f64 {
    let jitter: f64 = rng.random_range(0.0..5.0);
    let raw = n as f64 * 2.0 + jitter;
    (raw * 10.0).round() / 10.0
}

/// Estimate confidence for `n` selected functions
///
/// `0.7 + 0.05 * n`, saturating at `0.95`, rounded to two decimal places.
#[must_use]
pub fn estimate_confidence(n: usize) -> f64 {
    let raw = (0.7 + 0.05 * n as f64).min(0.95);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn time_is_bounded_by_jitter_window() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 0..10 {
            let t = estimate_time(n, &mut rng);
            assert!(t >= n as f64 * 2.0, "n={} t={}", n, t);
            // Rounding can land exactly on the upper bound
            assert!(t <= n as f64 * 2.0 + 5.0, "n={} t={}", n, t);
        }
    }

    #[test]
    fn time_has_one_decimal_place() {
        let mut rng = StdRng::seed_from_u64(3);
        let t = estimate_time(4, &mut rng);
        assert_eq!((t * 10.0).round() / 10.0, t);
    }

    #[test]
    fn confidence_table() {
        assert_eq!(estimate_confidence(0), 0.7);
        assert_eq!(estimate_confidence(1), 0.75);
        assert_eq!(estimate_confidence(2), 0.8);
        assert_eq!(estimate_confidence(5), 0.95);
    }

    #[test]
    fn confidence_saturates() {
        assert_eq!(estimate_confidence(6), 0.95);
        assert_eq!(estimate_confidence(100), 0.95);
    }

    #[test]
    fn confidence_is_non_decreasing() {
        let mut prev = 0.0;
        for n in 0..20 {
            let c = estimate_confidence(n);
            assert!(c >= prev);
            prev = c;
        }
    }
}
