use super::config::ScoringConfig;
use super::curve::curve_category;
use super::error::ScoreError;
use super::stats::{compute_statistics, CategoryStatistics};
use crate::roster::Submission;

/// One submission after a full scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubmission {
    pub name: String,
    pub raw_scores: Vec<f64>,
    pub pre_calc_scores: Vec<f64>,
    /// Per-category scores after optional curving.
    pub final_scores: Vec<f64>,
    /// The aggregate used for ranking.
    pub final_score: f64,
}

/// Top raw scorer(s) for one category. Winners are computed from raw
/// scores on purpose: the literal best performer is rewarded regardless of
/// curving or weighting. Ties all make the list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWinner {
    pub category: String,
    pub names: Vec<String>,
    pub raw_score: f64,
}

/// The complete result of one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Sorted descending by final score; ties keep roster order.
    pub standings: Vec<ScoredSubmission>,
    /// One entry per category, aligned with the configured category list.
    pub winners: Vec<CategoryWinner>,
}

/// Run the full pipeline over an immutable snapshot of the configuration
/// and submission set: parse raw scores, compute per-category statistics,
/// apply pre-calculations, optionally curve, aggregate, and rank.
///
/// Any raw score that cannot be parsed aborts the whole run; partial
/// results are never returned. Rerunning on unchanged inputs yields
/// bit-identical output.
pub fn score_report(
    config: &ScoringConfig,
    submissions: &[Submission],
) -> Result<Report, ScoreError> {
    if submissions.is_empty() {
        return Err(ScoreError::EmptyRoster);
    }

    let categories = &config.categories;
    let scale_max = config.scale.max as f64;

    let parsed = parse_raw_scores(config, submissions)?;

    // Statistics are computed over the entire submission set before any
    // transform runs; the relational kinds are meaningless otherwise.
    let category_stats: Vec<CategoryStatistics> = (0..categories.len())
        .map(|cat_idx| {
            let column: Vec<(&str, f64)> = parsed
                .iter()
                .map(|(name, raw)| (name.as_str(), raw[cat_idx]))
                .collect();
            compute_statistics(&column)
        })
        .collect();

    let pre_calc: Vec<Vec<f64>> = parsed
        .iter()
        .map(|(name, raw)| {
            raw.iter()
                .enumerate()
                .map(|(cat_idx, &score)| {
                    categories[cat_idx].precalc.apply(
                        score,
                        &category_stats[cat_idx],
                        name,
                        scale_max,
                    )
                })
                .collect()
        })
        .collect();

    let final_scores: Vec<Vec<f64>> = if config.enable_curve {
        let mut curved = vec![vec![0.0; categories.len()]; parsed.len()];
        for cat_idx in 0..categories.len() {
            let column: Vec<f64> = pre_calc.iter().map(|row| row[cat_idx]).collect();
            for (sub_idx, value) in curve_category(&column, scale_max).into_iter().enumerate() {
                curved[sub_idx][cat_idx] = value;
            }
        }
        curved
    } else {
        pre_calc.clone()
    };

    let mut standings: Vec<ScoredSubmission> = parsed
        .into_iter()
        .zip(pre_calc)
        .zip(final_scores)
        .map(|(((name, raw_scores), pre_calc_scores), final_scores)| {
            let final_score = aggregate(config, &final_scores);
            ScoredSubmission {
                name,
                raw_scores,
                pre_calc_scores,
                final_scores,
                final_score,
            }
        })
        .collect();

    // Winners come from raw scores, so compute them while standings are
    // still in roster order.
    let winners = category_winners(config, &standings);

    // Stable sort: equal final scores keep roster order.
    standings.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(Report { standings, winners })
}

/// Parse every raw score string up front. Empty strings count as 0; a
/// missing or unparseable score fails the run with the offending
/// submission and category named.
fn parse_raw_scores(
    config: &ScoringConfig,
    submissions: &[Submission],
) -> Result<Vec<(String, Vec<f64>)>, ScoreError> {
    let mut parsed = Vec::with_capacity(submissions.len());
    for sub in submissions {
        let mut raw = Vec::with_capacity(config.categories.len());
        for (cat_idx, category) in config.categories.iter().enumerate() {
            let text = sub.scores.get(cat_idx).ok_or_else(|| ScoreError::MissingScore {
                submission: sub.name.clone(),
                category: category.name.clone(),
            })?;
            let trimmed = text.trim();
            let value = if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().map_err(|_| ScoreError::InvalidScore {
                    submission: sub.name.clone(),
                    category: category.name.clone(),
                    value: text.clone(),
                })?
            };
            raw.push(value);
        }
        parsed.push((sub.name.clone(), raw));
    }
    Ok(parsed)
}

/// Combine one submission's final per-category scores into the aggregate.
/// The weight-sum-to-100 invariant is enforced at configuration time, not
/// re-checked here.
fn aggregate(config: &ScoringConfig, final_scores: &[f64]) -> f64 {
    if config.enable_weights {
        final_scores
            .iter()
            .zip(&config.categories)
            .map(|(score, category)| score * (category.weight as f64 / 100.0))
            .sum()
    } else if final_scores.is_empty() {
        0.0
    } else {
        final_scores.iter().sum::<f64>() / final_scores.len() as f64
    }
}

fn category_winners(config: &ScoringConfig, scored: &[ScoredSubmission]) -> Vec<CategoryWinner> {
    config
        .categories
        .iter()
        .enumerate()
        .map(|(cat_idx, category)| {
            let top = scored
                .iter()
                .map(|s| s.raw_scores[cat_idx])
                .fold(f64::NEG_INFINITY, f64::max);
            let names = scored
                .iter()
                .filter(|s| s.raw_scores[cat_idx] == top)
                .map(|s| s.name.clone())
                .collect();
            CategoryWinner {
                category: category.name.clone(),
                names,
                raw_score: top,
            }
        })
        .collect()
}
