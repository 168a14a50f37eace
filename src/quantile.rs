//! Exact quantiles by linear interpolation of the empirical CDF.
//!
//! For a sorted sequence of length `n` and target quantile `p`, the
//! fractional rank is `r = p * (n - 1)`; an integral `r` picks that
//! order statistic, otherwise the two neighbours are interpolated by
//! the fractional part of `r`.

/// Quantile of an ascending-sorted, non-empty slice. `p` in `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&p));

    let max_index = sorted.len() - 1;
    let rank = p * max_index as f64;
    let lo = rank.floor() as usize;
    if lo == max_index {
        return sorted[max_index];
    }
    let frac = rank.fract();
    sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac
}

/// Five-number summary `(min, q1, median, q3, max)` of an
/// ascending-sorted, non-empty slice.
pub fn five_number_sorted(sorted: &[f64]) -> (f64, f64, f64, f64, f64) {
    (
        sorted[0],
        quantile_sorted(sorted, 0.25),
        quantile_sorted(sorted, 0.5),
        quantile_sorted(sorted, 0.75),
        sorted[sorted.len() - 1],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_single_element_all_quantiles() {
        let v = [10.0];
        assert_eq!(quantile_sorted(&v, 0.0), 10.0);
        assert_eq!(quantile_sorted(&v, 0.25), 10.0);
        assert_eq!(quantile_sorted(&v, 0.5), 10.0);
        assert_eq!(quantile_sorted(&v, 1.0), 10.0);
    }

    #[test]
    fn test_two_elements_midpoint() {
        let v = [2.0, 6.0];
        assert!((quantile_sorted(&v, 0.5) - 4.0).abs() < EPS);
        assert!((quantile_sorted(&v, 0.25) - 3.0).abs() < EPS);
        assert!((quantile_sorted(&v, 0.75) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_interpolation_n4() {
        // r = 0.75 between 1 and 2, r = 1.5 between 2 and 3,
        // r = 2.25 between 3 and 4.
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&v, 0.25) - 1.75).abs() < EPS);
        assert!((quantile_sorted(&v, 0.5) - 2.5).abs() < EPS);
        assert!((quantile_sorted(&v, 0.75) - 3.25).abs() < EPS);
    }

    #[test]
    fn test_integral_rank_is_exact() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&v, 0.25), 2.0);
        assert_eq!(quantile_sorted(&v, 0.5), 3.0);
        assert_eq!(quantile_sorted(&v, 0.75), 4.0);
    }

    #[test]
    fn test_endpoints() {
        let v = [3.0, 7.0, 9.0];
        assert_eq!(quantile_sorted(&v, 0.0), 3.0);
        assert_eq!(quantile_sorted(&v, 1.0), 9.0);
    }

    #[test]
    fn test_five_number_sorted() {
        let v = [1.0, 2.0, 3.0, 4.0];
        let (min, q1, median, q3, max) = five_number_sorted(&v);
        assert_eq!(min, 1.0);
        assert!((q1 - 1.75).abs() < EPS);
        assert!((median - 2.5).abs() < EPS);
        assert!((q3 - 3.25).abs() < EPS);
        assert_eq!(max, 4.0);
    }

    #[test]
    fn test_all_ties() {
        let v = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(five_number_sorted(&v), (5.0, 5.0, 5.0, 5.0, 5.0));
    }
}
