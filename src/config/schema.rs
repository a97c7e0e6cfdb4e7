use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_competition_name")]
    pub competition_name: String,

    /// Scoring rules. Absent means the built-in defaults.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

fn default_competition_name() -> String {
    "New Competition".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            competition_name: default_competition_name(),
            scoring: Some(ScoringConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.competition_name, "New Competition");
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_named_competition_parse() {
        let yaml = r#"
competition_name: Regionals 2026
scoring:
  enable_weights: false
  categories:
    - name: Overall
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.competition_name, "Regionals 2026");
        let scoring = config.scoring.unwrap();
        assert!(!scoring.enable_weights);
        assert_eq!(scoring.categories.len(), 1);
    }
}
