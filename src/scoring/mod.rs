pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod precalc;
pub mod stats;
pub mod validation;

pub use config::*;
pub use engine::{score_report, CategoryWinner, Report, ScoredSubmission};
pub use error::ScoreError;
pub use precalc::PreCalc;
pub use stats::CategoryStatistics;
pub use validation::validate_scoring;
