//! Engine configuration
//!
//! Defaults reproduce the stock game tuning. Hosts may override any
//! subset from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SortError};
use crate::sim::Category;

/// Tuning for one engine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Categories in bin order; their count is the lane count
    pub categories: Vec<Category>,
    /// Number of items falling at once (one slot each)
    pub slot_count: usize,
    /// Units per second
    pub falling_speed: f32,
    pub max_health: f32,
    /// Health lost per wrongly sorted item
    pub hit_penalty: f32,
    /// Threshold at which an item is scored
    pub collection_line_y: f32,
    pub item_radius: f32,
    /// Vertical gap between slots after a reset
    pub spawn_spacing: f32,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            slot_count: SLOT_COUNT,
            falling_speed: FALLING_SPEED,
            max_health: MAX_HEALTH,
            hit_penalty: HIT_PENALTY,
            collection_line_y: COLLECTION_LINE_Y,
            item_radius: ITEM_RADIUS,
            spawn_spacing: SPAWN_SPACING,
        }
    }
}

impl SortConfig {
    pub fn lanes_count(&self) -> usize {
        self.categories.len()
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SortError::InvalidConfiguration(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric tuning. Category/lane checks live in the catalog
    /// and assigner constructors.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(SortError::InvalidConfiguration(msg)) };

        if self.lanes_count() < 2 {
            return invalid(format!("need at least 2 lanes, got {}", self.lanes_count()));
        }
        if self.slot_count == 0 {
            return invalid("slot_count must be at least 1".into());
        }
        if !self.falling_speed.is_finite() || self.falling_speed <= 0.0 {
            return invalid(format!("falling_speed must be positive, got {}", self.falling_speed));
        }
        if !self.max_health.is_finite() || self.max_health <= 0.0 {
            return invalid(format!("max_health must be positive, got {}", self.max_health));
        }
        if !self.hit_penalty.is_finite() || self.hit_penalty < 0.0 {
            return invalid(format!("hit_penalty must be non-negative, got {}", self.hit_penalty));
        }
        if !self.item_radius.is_finite() || self.item_radius < 0.0 {
            return invalid(format!("item_radius must be non-negative, got {}", self.item_radius));
        }
        if !self.collection_line_y.is_finite() {
            return invalid("collection_line_y must be finite".into());
        }
        if !self.spawn_spacing.is_finite() || self.spawn_spacing < 0.0 {
            return invalid(format!("spawn_spacing must be non-negative, got {}", self.spawn_spacing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SortConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lanes_count(), 4);
        assert_eq!(config.slot_count, 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SortConfig::from_json(r#"{ "falling_speed": 300.0, "hit_penalty": 25 }"#)
            .unwrap();
        assert_eq!(config.falling_speed, 300.0);
        assert_eq!(config.hit_penalty, 25.0);
        assert_eq!(config.max_health, MAX_HEALTH);
        assert_eq!(config.categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_json_categories() {
        let config =
            SortConfig::from_json(r#"{ "categories": ["Paper", "Glass"], "slot_count": 2 }"#)
                .unwrap();
        assert_eq!(config.lanes_count(), 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{ "categories": ["Paper"] }"#,
            r#"{ "slot_count": 0 }"#,
            r#"{ "falling_speed": 0.0 }"#,
            r#"{ "max_health": -1.0 }"#,
            r#"{ "hit_penalty": -5.0 }"#,
            "not json",
        ] {
            let err = SortConfig::from_json(json).unwrap_err();
            assert!(matches!(err, SortError::InvalidConfiguration(_)), "{json}");
        }
    }
}
