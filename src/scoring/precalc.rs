use serde::{Deserialize, Serialize};
use std::fmt;

use super::stats::CategoryStatistics;

/// Per-category transformation applied to each raw score before curving.
///
/// The first six kinds are pure functions of the raw score and the
/// configured scale maximum. The relational kinds compare a submission
/// against the whole field, so they additionally need the category
/// statistics and the submission's own name.
///
/// Example YAML:
/// ```yaml
/// categories:
///   - { name: Speed, weight: 50, precalc: invert }
///   - { name: Style, weight: 50, precalc: z-score }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreCalc {
    /// Identity; the raw score passes through untouched.
    #[default]
    None,
    /// √x. Reduces the impact of very high scores. x <= 0 -> 0.
    SquareRoot,
    /// log10(x) * (scale_max / 2). Aggressive high-score compression.
    /// x <= 0 -> 0.
    Log10,
    /// x². Magnifies the spread between high scores.
    Square,
    /// max(0, scale_max - x). For "lower is better" scores such as times.
    Invert,
    /// Pass/fail: any x > 0 becomes scale_max, everything else 0.
    Binary,
    /// ((x - mean) / stddev) * 10 + 50. Zero-variance categories collapse
    /// to 50 for everyone.
    ZScore,
    /// The submission's rank value in this category (top scorer highest).
    RankOrder,
    /// x - mean.
    DiffFromAverage,
    /// (x / max) * scale_max. A zero top score maps everything to 0.
    PctOfTopScore,
}

impl PreCalc {
    /// Whether this kind compares a submission against the rest of the
    /// field. Relational kinds are only meaningful when the statistics were
    /// computed over the entire submission set.
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            PreCalc::ZScore
                | PreCalc::RankOrder
                | PreCalc::DiffFromAverage
                | PreCalc::PctOfTopScore
        )
    }

    /// Apply the transformation to one raw score.
    pub fn apply(
        &self,
        raw: f64,
        stats: &CategoryStatistics,
        submission: &str,
        scale_max: f64,
    ) -> f64 {
        match self {
            PreCalc::None => raw,
            PreCalc::SquareRoot => {
                if raw <= 0.0 {
                    0.0
                } else {
                    raw.sqrt()
                }
            }
            PreCalc::Log10 => {
                if raw <= 0.0 {
                    0.0
                } else {
                    raw.log10() * (scale_max / 2.0)
                }
            }
            PreCalc::Square => raw * raw,
            PreCalc::Invert => (scale_max - raw).max(0.0),
            PreCalc::Binary => {
                if raw > 0.0 {
                    scale_max
                } else {
                    0.0
                }
            }
            PreCalc::ZScore => {
                if stats.stddev > 0.0 {
                    ((raw - stats.mean) / stats.stddev) * 10.0 + 50.0
                } else {
                    50.0
                }
            }
            PreCalc::RankOrder => {
                stats.rank_map.get(submission).copied().unwrap_or(0) as f64
            }
            PreCalc::DiffFromAverage => raw - stats.mean,
            PreCalc::PctOfTopScore => {
                if stats.max > 0.0 {
                    (raw / stats.max) * scale_max
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for PreCalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PreCalc::None => "None",
            PreCalc::SquareRoot => "Square Root",
            PreCalc::Log10 => "Log10",
            PreCalc::Square => "Square",
            PreCalc::Invert => "Invert (Max - x)",
            PreCalc::Binary => "Binary (Pass/Fail)",
            PreCalc::ZScore => "Z-Score",
            PreCalc::RankOrder => "Rank Order",
            PreCalc::DiffFromAverage => "Diff from Average",
            PreCalc::PctOfTopScore => "Pct of Top Score",
        };
        write!(f, "{}", label)
    }
}
