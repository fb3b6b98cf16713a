//! Ranking configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::restock::DeliveryTimeMode;

/// Largest number of decimals a restock score may be rounded to.
pub const MAX_SCORE_DECIMALS: u32 = 12;

/// Ranking output and restock derivation settings
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Decimals kept in restock scores
    #[serde(default = "default_score_decimals")]
    pub score_decimals: u32,

    /// Delivery-time derivation for the restock profile
    #[serde(default)]
    pub delivery_time: DeliveryTimeMode,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score_decimals > MAX_SCORE_DECIMALS {
            return Err(ValidationError::InvalidScoreDecimals {
                max: MAX_SCORE_DECIMALS,
                actual: self.score_decimals,
            });
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            score_decimals: default_score_decimals(),
            delivery_time: DeliveryTimeMode::default(),
        }
    }
}

fn default_score_decimals() -> u32 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_defaults() {
        let config = RankingConfig::default();
        assert_eq!(config.score_decimals, 4);
        assert_eq!(config.delivery_time, DeliveryTimeMode::Percentage);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ranking_deserialization() {
        let json = r#"{ "score_decimals": 6, "delivery_time": "raw" }"#;
        let config: RankingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.score_decimals, 6);
        assert_eq!(config.delivery_time, DeliveryTimeMode::Raw);
    }

    #[test]
    fn test_validation_too_many_decimals() {
        let config = RankingConfig {
            score_decimals: 13,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidScoreDecimals { max: 12, actual: 13 })
        );
    }
}
