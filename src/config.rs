//! Serializable tree configuration.
//!
//! The world rectangle and both tuning knobs are fixed when a tree is built,
//! so the whole configuration can be loaded from JSON or TOML up front.
use crate::error::{QuadTreeError, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Quadtree configuration.
///
/// # Example
///
/// ```rust
/// use spatio_quadtree::{Config, Rect};
///
/// let config = Config::new(Rect::new(0.0, 0.0, 1024.0, 768.0))
///     .with_max_levels(6)
///     .with_max_points_per_node(16);
/// assert!(config.validate().is_ok());
///
/// let json = r#"{
///     "bounds": { "origin": { "x": -180.0, "y": -90.0 }, "width": 360.0, "height": 180.0 },
///     "max_levels": 12
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.max_points_per_node, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deepest level a node may be split to. Leaves at this level hold any
    /// number of points. Values above [`Config::MAX_LEVELS_LIMIT`] are rejected
    /// by [`Config::validate`].
    #[serde(default = "Config::default_max_levels")]
    pub max_levels: u32,

    /// Points a leaf may hold before it is split. Zero is treated as one.
    #[serde(default = "Config::default_max_points_per_node")]
    pub max_points_per_node: usize,

    /// World rectangle covered by the root node
    pub bounds: Rect,
}

impl Config {
    /// Largest accepted `max_levels`. Halving an `f64` extent this many times
    /// leaves nodes that all share one midpoint.
    pub const MAX_LEVELS_LIMIT: u32 = 1024;

    const fn default_max_levels() -> u32 {
        8
    }

    const fn default_max_points_per_node() -> usize {
        8
    }

    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            max_levels: Self::default_max_levels(),
            max_points_per_node: Self::default_max_points_per_node(),
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_max_levels(mut self, max_levels: u32) -> Self {
        self.max_levels = max_levels;
        self
    }

    pub fn with_max_points_per_node(mut self, max_points: usize) -> Self {
        self.max_points_per_node = max_points;
        self
    }

    /// Split capacity actually applied by the tree.
    pub fn effective_max_points_per_node(&self) -> usize {
        self.max_points_per_node.max(1)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let bounds = &self.bounds;
        if !bounds.is_valid() {
            return Err(QuadTreeError::InvalidBounds {
                x: bounds.min_x(),
                y: bounds.min_y(),
                width: bounds.width(),
                height: bounds.height(),
            });
        }

        if self.max_levels > Self::MAX_LEVELS_LIMIT {
            return Err(QuadTreeError::InvalidConfig(format!(
                "max_levels must be at most {}, got {}",
                Self::MAX_LEVELS_LIMIT,
                self.max_levels
            )));
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)
            .map_err(|e| QuadTreeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| QuadTreeError::InvalidConfig(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_levels, 8);
        assert_eq!(config.max_points_per_node, 8);
    }

    #[test]
    fn test_rejects_degenerate_bounds() {
        let config = Config::new(Rect::new(0.0, 0.0, 0.0, 10.0));
        assert!(matches!(
            config.validate(),
            Err(QuadTreeError::InvalidBounds { width, .. }) if width == 0.0
        ));

        let config = Config::new(Rect::new(0.0, f64::NAN, 10.0, 10.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_excessive_depth() {
        let config = Config::default().with_max_levels(5000);
        assert!(matches!(
            config.validate(),
            Err(QuadTreeError::InvalidConfig(_))
        ));

        let deepest = Config::default().with_max_levels(Config::MAX_LEVELS_LIMIT);
        assert!(deepest.validate().is_ok());
        assert!(
            deepest
                .with_max_levels(Config::MAX_LEVELS_LIMIT + 1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_zero_capacity_is_sanitized() {
        let config = Config::default().with_max_points_per_node(0);
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_max_points_per_node(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::new(Rect::new(-5.0, -5.0, 10.0, 10.0))
            .with_max_levels(3)
            .with_max_points_per_node(2);

        let json = config.to_json().unwrap();
        let loaded = Config::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{ "bounds": { "origin": { "x": 0.0, "y": 0.0 }, "width": -1.0, "height": 1.0 } }"#;
        assert!(matches!(
            Config::from_json(json),
            Err(QuadTreeError::InvalidBounds { .. })
        ));

        assert!(matches!(
            Config::from_json("not json"),
            Err(QuadTreeError::Serialization(_))
        ));
    }
}
