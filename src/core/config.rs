//! Configuration for the map view and viewport fitting
//!
//! Presets are exposed through [`MapViewProfile`] and resolved into concrete
//! [`MapViewOptions`]. A [`DirectoryConfig`] wraps the options so they can be
//! loaded from JSON alongside the dataset.

use crate::core::{
    constants::{
        DEFAULT_CENTER, DEFAULT_VIEWPORT_SIZE, DEFAULT_ZOOM, FIT_PADDING_PX, MAX_FIT_ZOOM,
        MAX_ZOOM, MIN_REGION_SPAN_DEG, MIN_ZOOM,
    },
    geo::{LatLng, Point},
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum MapViewProfile {
    Standard,
    Compact,
    Custom(MapViewOptions),
}

impl MapViewProfile {
    pub fn resolve(&self) -> MapViewOptions {
        match self {
            Self::Standard => MapViewOptions {
                default_center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                default_zoom: DEFAULT_ZOOM,
                min_zoom: MIN_ZOOM,
                max_zoom: MAX_ZOOM,
                max_fit_zoom: MAX_FIT_ZOOM,
                fit_padding_px: FIT_PADDING_PX,
                min_region_span_deg: MIN_REGION_SPAN_DEG,
                size: Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1),
            },
            Self::Compact => MapViewOptions {
                default_center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                default_zoom: 5.0,
                min_zoom: 3.0,
                max_zoom: MAX_ZOOM,
                max_fit_zoom: 13.0,
                fit_padding_px: 10.0,
                min_region_span_deg: 0.05,
                size: Point::new(400.0, 300.0),
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for MapViewProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewOptions {
    pub default_center: LatLng,
    pub default_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom ceiling for fits; keeps single-entity regions from over-zooming.
    pub max_fit_zoom: f64,
    pub fit_padding_px: f64,
    pub min_region_span_deg: f64,
    pub size: Point,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        MapViewProfile::default().resolve()
    }
}

/// Top-level configuration of a directory session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub map: MapViewOptions,
}

impl DirectoryConfig {
    pub fn from_profile(profile: MapViewProfile) -> Self {
        Self {
            map: profile.resolve(),
        }
    }

    /// Parses and validates a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DirectoryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let map = &self.map;

        if !map.min_zoom.is_finite() || !map.max_zoom.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "zoom limits must be finite, got {}..{}",
                map.min_zoom, map.max_zoom
            )));
        }
        if map.min_zoom > map.max_zoom {
            return Err(Error::InvalidConfig(format!(
                "min_zoom {} exceeds max_zoom {}",
                map.min_zoom, map.max_zoom
            )));
        }
        if map.max_fit_zoom < map.min_zoom {
            return Err(Error::InvalidConfig(format!(
                "max_fit_zoom {} is below min_zoom {}",
                map.max_fit_zoom, map.min_zoom
            )));
        }
        if map.size.x <= 0.0 || map.size.y <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "viewport size must be positive, got {}x{}",
                map.size.x, map.size.y
            )));
        }
        if map.fit_padding_px < 0.0 {
            return Err(Error::InvalidConfig("fit_padding_px must not be negative".into()));
        }
        if map.min_region_span_deg <= 0.0 {
            return Err(Error::InvalidConfig("min_region_span_deg must be positive".into()));
        }
        if !map.default_center.is_valid() {
            return Err(Error::InvalidConfig(format!(
                "default_center ({}, {}) is not a valid coordinate",
                map.default_center.lat, map.default_center.lng
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_profile_matches_constants() {
        let options = MapViewProfile::Standard.resolve();
        assert_eq!(options.default_zoom, 6.0);
        assert_eq!(options.fit_padding_px, 20.0);
        assert_eq!(options.default_center, LatLng::new(40.4168, -3.7038));
    }

    #[test]
    fn test_custom_profile_passthrough() {
        let mut custom = MapViewOptions::default();
        custom.max_fit_zoom = 12.0;
        let resolved = MapViewProfile::Custom(custom.clone()).resolve();
        assert_eq!(resolved, custom);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = DirectoryConfig::from_json_str(r#"{ "map": { "fit_padding_px": 32.0 } }"#)
            .unwrap();
        assert_eq!(config.map.fit_padding_px, 32.0);
        assert_eq!(config.map.default_zoom, 6.0);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = DirectoryConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_rejects_inverted_zoom_range() {
        let result = DirectoryConfig::from_json_str(r#"{ "map": { "min_zoom": 10, "max_zoom": 4 } }"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_finite_zoom_limits() {
        let config = DirectoryConfig::from_profile(MapViewProfile::Custom(MapViewOptions {
            min_zoom: f64::NAN,
            ..MapViewOptions::default()
        }));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = DirectoryConfig::from_json_str("{ map: ");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
