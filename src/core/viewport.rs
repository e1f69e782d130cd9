use crate::core::{
    config::MapViewOptions,
    constants::{DEFAULT_CENTER, DEFAULT_VIEWPORT_SIZE, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM},
    geo::{LatLng, LatLngBounds, Point, MAX_LATITUDE},
};
use serde::{Deserialize, Serialize};

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Creates a viewport from resolved map view options
    pub fn from_options(options: &MapViewOptions) -> Self {
        let mut viewport = Self::new(options.default_center, options.default_zoom, options.size);
        viewport.set_zoom_limits(options.min_zoom, options.max_zoom);
        viewport
    }

    /// Sets the center of the viewport, clamped to the projectable world
    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(
            center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            center.lng.clamp(-180.0, 180.0),
        );
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits. Inverted limits are swapped and non-finite
    /// limits are ignored.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if !min_zoom.is_finite() || !max_zoom.is_finite() {
            log::warn!("ignoring non-finite zoom limits {}..{}", min_zoom, max_zoom);
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            log::warn!("zoom limits {} > {}, swapping", min_zoom, max_zoom);
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        lat_lng.to_world_pixel(zoom.unwrap_or(self.zoom))
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        LatLng::from_world_pixel(pixel, zoom.unwrap_or(self.zoom))
    }

    /// Converts a geographical coordinate to screen pixel coordinates (container relative)
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let origin = self.project(&self.center, None);
        let point = self.project(lat_lng, None);
        Point::new(
            point.x - origin.x + self.size.x / 2.0,
            point.y - origin.y + self.size.y / 2.0,
        )
    }

    /// Converts screen pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.project(&self.center, None);
        let world = Point::new(
            pixel.x - self.size.x / 2.0 + origin.x,
            pixel.y - self.size.y / 2.0 + origin.y,
        );
        self.unproject(&world, None)
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let nw = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let se = self.pixel_to_lat_lng(&Point::new(self.size.x, self.size.y));

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Fits the viewport to contain the given bounds.
    ///
    /// The camera centers on the projected bounds and takes the highest zoom at which
    /// the projected box still fits inside the viewport shrunk by `padding`
    /// pixels on every side, capped at `max_fit_zoom`. The result depends only
    /// on the inputs and the viewport size, so repeating a call is a no-op.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: f64, max_fit_zoom: f64) {
        let available = Point::new(
            (self.size.x - 2.0 * padding).max(1.0),
            (self.size.y - 2.0 * padding).max(1.0),
        );

        let nw = LatLng::new(bounds.north_east.lat, bounds.south_west.lng);
        let se = LatLng::new(bounds.south_west.lat, bounds.north_east.lng);

        // Projected extent doubles with each zoom level, so measure once at
        // zoom 0 and solve for the largest zoom that still fits.
        let nw_px = nw.to_world_pixel(0.0);
        let se_px = se.to_world_pixel(0.0);
        let width = (se_px.x - nw_px.x).abs();
        let height = (se_px.y - nw_px.y).abs();

        let zoom_x = if width > 0.0 {
            (available.x / width).log2()
        } else {
            f64::INFINITY
        };
        let zoom_y = if height > 0.0 {
            (available.y / height).log2()
        } else {
            f64::INFINITY
        };

        let ceiling = max_fit_zoom.min(self.max_zoom);
        let best_zoom = zoom_x.min(zoom_y).floor().min(ceiling).max(self.min_zoom);

        // Center on the projected midpoint; Mercator stretches latitudes
        // unevenly so the plain lat/lng mean sits off-center on screen.
        let mid = Point::new((nw_px.x + se_px.x) / 2.0, (nw_px.y + se_px.y) / 2.0);
        let center = LatLng::from_world_pixel(&mid, 0.0);

        log::debug!(
            "fit_bounds: center=({:.4}, {:.4}) zoom={}",
            center.lat,
            center.lng,
            best_zoom
        );

        self.set_center(center);
        self.set_zoom(best_zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            DEFAULT_ZOOM,
            Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(40.4168, -3.7038),
            10.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(viewport.zoom, 10.0);
        assert_eq!(viewport.center.lat, 40.4168);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_default_is_madrid() {
        let viewport = Viewport::default();
        assert_eq!(viewport.center, LatLng::new(40.4168, -3.7038));
        assert_eq!(viewport.zoom, 6.0);
    }

    #[test]
    fn test_center_projects_to_middle() {
        let viewport = Viewport::new(LatLng::new(40.0, -3.0), 8.0, Point::new(512.0, 512.0));

        let pixel = viewport.lat_lng_to_pixel(&viewport.center);
        assert!((pixel.x - 256.0).abs() < 1e-6);
        assert!((pixel.y - 256.0).abs() < 1e-6);

        let back = viewport.pixel_to_lat_lng(&Point::new(256.0, 256.0));
        assert!((back.lat - 40.0).abs() < 1e-9);
        assert!((back.lng + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(2.0, 15.0);

        viewport.set_zoom(1.0);
        assert_eq!(viewport.zoom, 2.0);

        viewport.set_zoom(20.0);
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_inverted_zoom_limits_are_swapped() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(10.0, 4.0);

        assert_eq!(viewport.min_zoom, 4.0);
        assert_eq!(viewport.max_zoom, 10.0);
        assert_eq!(viewport.zoom, 6.0);

        viewport.set_zoom_limits(f64::NAN, 12.0);
        assert_eq!(viewport.min_zoom, 4.0);
        assert_eq!(viewport.max_zoom, 10.0);
    }

    #[test]
    fn test_fit_bounds_contains_region() {
        let mut viewport = Viewport::default();
        let region = LatLngBounds::from_coords(36.7, -6.0, 43.3, 2.2);
        viewport.fit_bounds(&region, 20.0, 15.0);

        let visible = viewport.bounds();
        assert!(visible.contains(&region.south_west));
        assert!(visible.contains(&region.north_east));
        assert!((viewport.center.lng - region.center().lng).abs() < 1e-9);
    }

    #[test]
    fn test_fit_bounds_is_idempotent() {
        let mut viewport = Viewport::default();
        let region = LatLngBounds::from_coords(39.4, -3.7, 41.4, 2.2);

        viewport.fit_bounds(&region, 20.0, 15.0);
        let first = viewport.clone();
        viewport.fit_bounds(&region, 20.0, 15.0);

        assert_eq!(viewport, first);
    }

    #[test]
    fn test_fit_bounds_clamps_degenerate_region() {
        let mut viewport = Viewport::default();
        let point = LatLng::new(40.4168, -3.7038);
        viewport.fit_bounds(&LatLngBounds::new(point, point), 20.0, 15.0);

        assert_eq!(viewport.zoom, 15.0);
        assert!(viewport.zoom.is_finite());
    }
}
