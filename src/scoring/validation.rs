use super::config::ScoringConfig;
use std::collections::HashSet;

/// Validate scoring configuration at startup, before any scoring runs.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.categories.is_empty() {
        errors.push("scoring.categories: at least one category is required".to_string());
    }

    let mut seen = HashSet::new();
    for (i, category) in config.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            errors.push(format!("scoring.categories[{}].name: must not be empty", i));
        } else if !seen.insert(category.name.as_str()) {
            errors.push(format!(
                "scoring.categories[{}].name: duplicate category '{}'",
                i, category.name
            ));
        }
        if category.weight > 100 {
            errors.push(format!(
                "scoring.categories[{}].weight: {} exceeds 100",
                i, category.weight
            ));
        }
    }

    if config.enable_weights && !config.categories.is_empty() {
        let sum: u32 = config.categories.iter().map(|c| c.weight).sum();
        if sum != 100 {
            errors.push(format!(
                "scoring.categories: weights must add up to 100, current sum is {}",
                sum
            ));
        }
    }

    if config.scale.min >= config.scale.max {
        errors.push(format!(
            "scoring.scale: min ({}) must be less than max ({})",
            config.scale.min, config.scale.max
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
