//! Scoring configuration
//!
//! Dimension weights plus every tier boundary the scorers compare against.
//! A partial JSON document overrides only the fields it names.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub value_weight: f64,
    pub growth_weight: f64,
    pub quality_weight: f64,
    pub balance_weight: f64,

    pub peg_attractive: f64,
    pub peg_fair: f64,
    pub peg_rich: f64,

    pub growth_strong: f64,
    pub growth_healthy: f64,
    pub growth_moderate: f64,

    pub op_margin_strong: f64,
    pub op_margin_ok: f64,
    pub fcf_margin_strong: f64,
    pub fcf_margin_ok: f64,
    pub roe_strong: f64,
    pub roe_ok: f64,

    pub debt_light: f64,
    pub net_debt_low: f64,
    pub net_debt_ok: f64,
    pub interest_strong: f64,
    pub current_strong: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            value_weight: 30.0,
            growth_weight: 25.0,
            quality_weight: 25.0,
            balance_weight: 20.0,
            peg_attractive: 1.0,
            peg_fair: 1.5,
            peg_rich: 2.0,
            growth_strong: 20.0,
            growth_healthy: 12.0,
            growth_moderate: 8.0,
            op_margin_strong: 20.0,
            op_margin_ok: 10.0,
            fcf_margin_strong: 15.0,
            fcf_margin_ok: 5.0,
            roe_strong: 20.0,
            roe_ok: 10.0,
            debt_light: 0.5,
            net_debt_low: 1.0,
            net_debt_ok: 3.0,
            interest_strong: 8.0,
            current_strong: 1.5,
        }
    }
}

impl ScoringConfig {
    pub fn total_weight(&self) -> f64 {
        self.value_weight + self.growth_weight + self.quality_weight + self.balance_weight
    }

    /// Check the weights and tier ordering the scorers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in [
            ("value", self.value_weight),
            ("growth", self.growth_weight),
            ("quality", self.quality_weight),
            ("balance", self.balance_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { dimension, value });
            }
        }

        let total = self.total_weight();
        if (total - 100.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::WeightSum(total));
        }

        let ordered = [
            (
                self.peg_attractive <= self.peg_fair && self.peg_fair <= self.peg_rich,
                "peg_attractive <= peg_fair <= peg_rich",
            ),
            (
                self.growth_moderate <= self.growth_healthy
                    && self.growth_healthy <= self.growth_strong,
                "growth_moderate <= growth_healthy <= growth_strong",
            ),
            (self.op_margin_ok <= self.op_margin_strong, "op_margin_ok <= op_margin_strong"),
            (self.fcf_margin_ok <= self.fcf_margin_strong, "fcf_margin_ok <= fcf_margin_strong"),
            (self.roe_ok <= self.roe_strong, "roe_ok <= roe_strong"),
            (self.net_debt_low <= self.net_debt_ok, "net_debt_low <= net_debt_ok"),
        ];
        // NaN boundaries fail these comparisons too
        if let Some((_, rule)) = ordered.iter().find(|(ok, _)| !ok) {
            return Err(ConfigError::TierOrder(*rule));
        }

        Ok(())
    }

    /// Parse a (possibly partial) JSON rubric and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_weight(), 100.0);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = ScoringConfig::from_json_str(
            r#"{"value_weight": 40, "balance_weight": 10, "peg_rich": 2.5}"#,
        )
        .unwrap();
        assert_eq!(config.value_weight, 40.0);
        assert_eq!(config.balance_weight, 10.0);
        assert_eq!(config.peg_rich, 2.5);
        assert_eq!(config.growth_weight, 25.0);
        assert_eq!(config.roe_strong, 20.0);
    }

    #[test]
    fn test_weights_must_sum_to_100() {
        let err = ScoringConfig::from_json_str(r#"{"value_weight": 50}"#).unwrap_err();
        assert!(matches!(err, ConfigError::WeightSum(total) if (total - 120.0).abs() < 1e-9));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = ScoringConfig {
            value_weight: -10.0,
            growth_weight: 65.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight { dimension: "value", .. })
        ));
    }

    #[test]
    fn test_tier_order_rejected() {
        let config = ScoringConfig {
            peg_fair: 0.9,
            ..ScoringConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TierOrder(_))));

        let config = ScoringConfig {
            growth_healthy: 25.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TierOrder(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            ScoringConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rubric.json");
        std::fs::write(&path, r#"{"growth_weight": 35, "quality_weight": 15}"#).unwrap();

        let config = ScoringConfig::from_path(&path).unwrap();
        assert_eq!(config.growth_weight, 35.0);
        assert_eq!(config.quality_weight, 15.0);

        let missing = ScoringConfig::from_path(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
