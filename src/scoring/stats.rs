use std::collections::HashMap;

/// Descriptive statistics for one category across all submissions.
///
/// Recomputed from scratch on every scoring run; nothing here is cached
/// between runs. The relational pre-calculations (z-score, rank order,
/// diff from average, pct of top score) take this struct as a parameter,
/// which is what enforces the stats-before-transform ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation. 0 when fewer than two submissions exist,
    /// so downstream transforms never divide by zero.
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    /// Submission name -> descending rank value within this category.
    /// The top scorer gets the highest value (`count`), the bottom gets 1.
    /// Equal raw scores get distinct ranks via stable input-order tie-break;
    /// this is a deliberate simplification, not rank-with-ties.
    pub rank_map: HashMap<String, usize>,
}

/// Compute statistics over one category's raw scores.
///
/// `scores` is (submission name, raw score) in roster order. Callers must
/// guarantee one entry per submission; score/category alignment is checked
/// upstream when raw strings are parsed.
pub fn compute_statistics(scores: &[(&str, f64)]) -> CategoryStatistics {
    let count = scores.len();

    let mean = if count > 0 {
        scores.iter().map(|(_, v)| v).sum::<f64>() / count as f64
    } else {
        0.0
    };

    let stddev = if count > 1 {
        let variance = scores
            .iter()
            .map(|(_, v)| (v - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    let min = scores
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::INFINITY, f64::min);
    let max = scores
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if count > 0 { (min, max) } else { (0.0, 0.0) };

    // Sort indices descending by score. The sort is stable, so ties keep
    // roster order and ranks stay unique.
    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .1
            .partial_cmp(&scores[a].1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rank_map = HashMap::with_capacity(count);
    for (position, &idx) in order.iter().enumerate() {
        rank_map.insert(scores[idx].0.to_string(), count - position);
    }

    CategoryStatistics {
        count,
        mean,
        stddev,
        min,
        max,
        rank_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_stddev() {
        let stats = compute_statistics(&[("a", 10.0), ("b", 20.0), ("c", 30.0)]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 20.0);
        assert!((stats.stddev - 10.0).abs() < 1e-9);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
    }

    #[test]
    fn test_single_submission_has_zero_stddev() {
        let stats = compute_statistics(&[("only", 42.0)]);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.rank_map["only"], 1);
    }

    #[test]
    fn test_mean_within_raw_bounds() {
        let stats = compute_statistics(&[("a", 5.0), ("b", 95.0), ("c", 50.0), ("d", 7.5)]);
        assert!(stats.stddev >= 0.0);
        assert!(stats.mean >= stats.min && stats.mean <= stats.max);
    }

    #[test]
    fn test_rank_map_descending() {
        let stats = compute_statistics(&[("a", 50.0), ("b", 80.0), ("c", 20.0)]);
        assert_eq!(stats.rank_map["b"], 3); // top scorer, highest rank value
        assert_eq!(stats.rank_map["a"], 2);
        assert_eq!(stats.rank_map["c"], 1);
    }

    #[test]
    fn test_rank_ties_break_by_roster_order() {
        // Scores [5, 5, 10, 1] -> ranks [3, 2, 4, 1]: the tied pair does not
        // share a rank, the earlier entry wins.
        let stats =
            compute_statistics(&[("a", 5.0), ("b", 5.0), ("c", 10.0), ("d", 1.0)]);
        assert_eq!(stats.rank_map["a"], 3);
        assert_eq!(stats.rank_map["b"], 2);
        assert_eq!(stats.rank_map["c"], 4);
        assert_eq!(stats.rank_map["d"], 1);
    }

    #[test]
    fn test_rank_values_are_contiguous() {
        let stats = compute_statistics(&[
            ("a", 3.0),
            ("b", 3.0),
            ("c", 3.0),
            ("d", 9.0),
            ("e", 1.0),
        ]);
        let mut ranks: Vec<usize> = stats.rank_map.values().copied().collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_category() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert!(stats.rank_map.is_empty());
    }
}
