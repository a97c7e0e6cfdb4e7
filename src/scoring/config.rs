use serde::{Deserialize, Serialize};

use super::precalc::PreCalc;

/// Default chart color palette, assigned to categories in order when the
/// config doesn't specify one.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Main scoring configuration.
///
/// Defines the active category set and the switches consulted by the
/// pipeline. This is an immutable value passed into each scoring run; the
/// pipeline never reads ambient state.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   enable_curve: true
///   enable_weights: true
///   scale: { min: 1, max: 100 }
///   categories:
///     - { name: Combat, weight: 60 }
///     - { name: Design, weight: 20, precalc: square-root }
///     - { name: Creativity, weight: 20, precalc: z-score }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Active categories, in display order. Every submission carries one
    /// raw score per entry here.
    pub categories: Vec<CategoryConfig>,

    /// Rescale each category so its top pre-calculated score becomes
    /// `scale.max`. One switch for the whole run, not per category.
    #[serde(default = "default_true")]
    pub enable_curve: bool,

    /// Aggregate with per-category weights instead of a plain average.
    /// When enabled, weights must sum to 100 (checked by validation).
    #[serde(default = "default_true")]
    pub enable_weights: bool,

    /// Score scale; `max` is the clamp/target value for transforms and
    /// curving.
    #[serde(default)]
    pub scale: ScaleConfig,
}

fn default_true() -> bool {
    true
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryConfig::new("Combat", 60, 0),
                CategoryConfig::new("Design", 20, 1),
                CategoryConfig::new("Creativity", 20, 2),
            ],
            enable_curve: true,
            enable_weights: true,
            scale: ScaleConfig::default(),
        }
    }
}

/// One competition category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    pub name: String,

    /// Contribution to the aggregate score, as an integer percent. Only
    /// consulted when `enable_weights` is on.
    #[serde(default)]
    pub weight: u32,

    /// Transformation applied to raw scores before curving.
    #[serde(default)]
    pub precalc: PreCalc,

    /// Display color (hex). Opaque to the pipeline; passed through to
    /// report output.
    #[serde(default)]
    pub color: Option<String>,
}

impl CategoryConfig {
    fn new(name: &str, weight: u32, palette_index: usize) -> Self {
        Self {
            name: name.to_string(),
            weight,
            precalc: PreCalc::None,
            color: Some(DEFAULT_COLORS[palette_index % DEFAULT_COLORS.len()].to_string()),
        }
    }
}

/// Score scale bounds. `min < max` is enforced by validation.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    pub min: i64,
    pub max: i64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.categories[0].name, "Combat");
        assert_eq!(config.categories[0].weight, 60);
        assert_eq!(config.categories[0].precalc, PreCalc::None);
        assert!(config.enable_curve);
        assert!(config.enable_weights);
        assert_eq!(config.scale, ScaleConfig { min: 1, max: 100 });
        let total: u32 = config.categories.iter().map(|c| c.weight).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r##"
enable_curve: false
enable_weights: true
scale:
  min: 0
  max: 10
categories:
  - name: Speed
    weight: 70
    precalc: invert
    color: "#d62728"
  - name: Style
    weight: 30
    precalc: rank-order
"##;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(!config.enable_curve);
        assert!(config.enable_weights);
        assert_eq!(config.scale, ScaleConfig { min: 0, max: 10 });
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].precalc, PreCalc::Invert);
        assert_eq!(config.categories[0].color.as_deref(), Some("#d62728"));
        assert_eq!(config.categories[1].precalc, PreCalc::RankOrder);
        assert!(config.categories[1].color.is_none());
    }

    #[test]
    fn test_minimal_config_parse_uses_defaults() {
        let yaml = r#"
categories:
  - name: Overall
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.enable_curve);
        assert!(config.enable_weights);
        assert_eq!(config.scale, ScaleConfig::default());
        assert_eq!(config.categories[0].weight, 0);
        assert_eq!(config.categories[0].precalc, PreCalc::None);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
