use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator latitude limit
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Clamps latitude to the range Web Mercator can project
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Projects to world pixel coordinates (EPSG:3857) for the given zoom level
    pub fn to_world_pixel(&self, zoom: f64) -> Point {
        let scale = 256.0 * 2_f64.powf(zoom);
        let lat_rad = Self::clamp_lat(self.lat).to_radians();

        let x = (self.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (PI / 4.0 + lat_rad / 2.0).tan().ln() / PI) / 2.0 * scale;

        Point::new(x, y)
    }

    /// Inverse of [`LatLng::to_world_pixel`]
    pub fn from_world_pixel(point: &Point, zoom: f64) -> Self {
        let scale = 256.0 * 2_f64.powf(zoom);

        let lng = point.x / scale * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * point.y / scale);
        let lat = n.sinh().atan().to_degrees();

        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Minimal axis-aligned box covering every valid point.
    ///
    /// Points that fail [`LatLng::is_valid`] are skipped; returns `None` when
    /// nothing valid remains.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut valid = points.into_iter().filter(|p| p.is_valid());
        let first = valid.next()?;
        let mut bounds = Self::new(*first, *first);
        for point in valid {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    /// Returns `true` when the box has collapsed on either axis
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span.lat <= 0.0 || span.lng <= 0.0
    }

    /// Grows each axis symmetrically around the center until it spans at
    /// least `min_span` degrees. Axes already wider are left alone.
    pub fn with_min_span(&self, min_span: f64) -> LatLngBounds {
        let center = self.center();
        let span = self.span();
        let half_lat = span.lat.max(min_span) / 2.0;
        let half_lng = span.lng.max(min_span) / 2.0;

        LatLngBounds::from_coords(
            (center.lat - half_lat).max(-90.0),
            (center.lng - half_lng).max(-180.0),
            (center.lat + half_lat).min(90.0),
            (center.lng + half_lng).min(180.0),
        )
    }
}
