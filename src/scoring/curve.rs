/// Curve one category's pre-calculated scores so the top performer lands on
/// `scale_max`. Returns curved scores in the same order as the input.
///
/// - max > 0: plain linear rescale by `scale_max / max`.
/// - max == min (all scores equal, at or below zero): everyone maps to
///   `scale_max`. The all-zero case tying at the ceiling instead of the
///   floor is a documented quirk of the source behavior, preserved as-is.
/// - otherwise (max <= 0 with spread, e.g. diff-from-average output):
///   interpolate `(score - min) / (max - min) * scale_max`.
pub fn curve_category(pre_calc: &[f64], scale_max: f64) -> Vec<f64> {
    if pre_calc.is_empty() {
        return Vec::new();
    }

    let max = pre_calc.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = pre_calc.iter().copied().fold(f64::INFINITY, f64::min);

    pre_calc
        .iter()
        .map(|&score| {
            if max > 0.0 {
                score * (scale_max / max)
            } else if max == min {
                scale_max
            } else {
                scale_max * (score - min) / (max - min)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_rescale_to_scale_max() {
        // Raw [50, 80, 20] on a 1-100 scale -> [62.5, 100, 25]
        let curved = curve_category(&[50.0, 80.0, 20.0], 100.0);
        assert_eq!(curved, vec![62.5, 100.0, 25.0]);
    }

    #[test]
    fn test_top_score_reaches_scale_max() {
        let curved = curve_category(&[3.0, 7.0, 1.5, 6.9], 100.0);
        let top = curved.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((top - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_ties_at_ceiling() {
        // Preserved quirk: an all-zero category curves to the maximum, not
        // to zero.
        let curved = curve_category(&[0.0, 0.0, 0.0], 100.0);
        assert_eq!(curved, vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_negative_scores_interpolate() {
        // Diff-from-average output: [-10, 0, -5] -> max 0, min -10, spread.
        let curved = curve_category(&[-10.0, 0.0, -5.0], 100.0);
        assert_eq!(curved, vec![0.0, 100.0, 50.0]);
    }

    #[test]
    fn test_all_negative_equal_ties_at_ceiling() {
        let curved = curve_category(&[-5.0, -5.0], 100.0);
        assert_eq!(curved, vec![100.0, 100.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(curve_category(&[], 100.0).is_empty());
    }

    #[test]
    fn test_respects_configured_scale() {
        let curved = curve_category(&[5.0, 10.0], 10.0);
        assert_eq!(curved, vec![5.0, 10.0]);
    }
}
