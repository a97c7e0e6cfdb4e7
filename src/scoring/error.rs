use thiserror::Error;

/// Hard failures of a scoring run.
///
/// Every variant is detected before any partial result is built; a run
/// either returns a complete report or one of these. Degenerate statistics
/// (zero variance, all-zero categories) are handled by documented fallbacks
/// in the transforms and never surface here.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("submission '{submission}' has no score for category '{category}'")]
    MissingScore {
        submission: String,
        category: String,
    },

    #[error("submission '{submission}' has an invalid score '{value}' for category '{category}'")]
    InvalidScore {
        submission: String,
        category: String,
        value: String,
    },

    #[error("there are no submissions to score")]
    EmptyRoster,
}
