//! Map view of the visible subset
//!
//! Keeps the marker layer in step with the visible subset and refits the
//! camera whenever that subset changes.

use crate::core::{
    config::MapViewOptions,
    geo::{LatLngBounds, Point},
    viewport::Viewport,
};
use crate::directory::entity::{Entity, EntityId};
use crate::layers::marker::{EntityMarker, MarkerLayer};

/// Region the camera should cover for `entities`.
///
/// The minimal box over every placeable entity, widened to `min_span`
/// degrees on any collapsed axis. `None` when no entity can be placed.
pub fn fit_region<'a, I>(entities: I, min_span: f64) -> Option<LatLngBounds>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let positions: Vec<_> = entities.into_iter().map(Entity::position).collect();
    LatLngBounds::from_points(positions.iter()).map(|b| b.with_min_span(min_span))
}

/// Result of synchronising the map with a new visible subset
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    /// Camera moved to cover the region
    Fitted(LatLngBounds),
    /// Region equals the one already fitted; camera untouched
    Unchanged,
    /// Nothing placeable; previous viewport retained
    Empty,
}

#[derive(Debug, Clone)]
pub struct MapView {
    viewport: Viewport,
    markers: MarkerLayer,
    options: MapViewOptions,
    last_fitted: Option<LatLngBounds>,
}

impl MapView {
    pub fn new(options: MapViewOptions) -> Self {
        Self {
            viewport: Viewport::from_options(&options),
            markers: MarkerLayer::new(),
            options,
            last_fitted: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn options(&self) -> &MapViewOptions {
        &self.options
    }

    pub fn last_fitted(&self) -> Option<&LatLngBounds> {
        self.last_fitted.as_ref()
    }

    /// Rebuilds markers from `visible` and fits the camera to them
    pub fn sync<'a, I>(&mut self, visible: I) -> FitOutcome
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        let visible: Vec<&Entity> = visible.into_iter().collect();
        self.markers.set_entities(visible.iter().copied());
        self.fit_bounds(visible)
    }

    /// Fits the camera to `entities` with the configured padding.
    ///
    /// Empty input keeps the current viewport. Fitting the same region twice
    /// leaves the camera where the first call put it.
    pub fn fit_bounds<'a, I>(&mut self, entities: I) -> FitOutcome
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        let Some(region) = fit_region(entities, self.options.min_region_span_deg) else {
            log::debug!("fit skipped: no placeable entities");
            return FitOutcome::Empty;
        };

        if self.last_fitted.as_ref() == Some(&region) {
            return FitOutcome::Unchanged;
        }

        self.viewport.fit_bounds(
            &region,
            self.options.fit_padding_px,
            self.options.max_fit_zoom,
        );
        self.last_fitted = Some(region.clone());
        FitOutcome::Fitted(region)
    }

    /// Resizing invalidates the last fit so the next sync refits
    pub fn resize(&mut self, size: Point) {
        self.viewport.set_size(size);
        if let Some(region) = self.last_fitted.clone() {
            self.viewport.fit_bounds(
                &region,
                self.options.fit_padding_px,
                self.options.max_fit_zoom,
            );
        }
    }

    /// Marker under a screen point, if any
    pub fn marker_at(&self, point: &Point) -> Option<&EntityMarker> {
        self.markers.hit_test(&self.viewport, point)
    }

    /// Id to report when a marker is activated; `None` if it is not drawn
    pub fn activate(&self, id: &EntityId) -> Option<EntityId> {
        self.markers.get(id).map(|m| m.id.clone())
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(MapViewOptions::default())
    }
}
