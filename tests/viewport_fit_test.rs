use sacabollos::prelude::*;

/// Tests for keeping the map camera fitted to the visible subset

fn at(id: &str, lat: f64, lng: f64) -> Entity {
    Entity::new(id, id, "Somewhere", LatLng::new(lat, lng), EntityKind::Company, 4.0)
}

#[test]
fn test_empty_subset_retains_viewport() {
    let mut view = MapView::default();
    view.sync(&[at("a", 41.3874, 2.1686), at("b", 39.4699, -0.3763)]);
    let fitted = view.viewport().clone();

    let none: Vec<Entity> = Vec::new();
    assert_eq!(view.fit_bounds(&none), FitOutcome::Empty);
    assert_eq!(view.viewport(), &fitted);
}

#[test]
fn test_empty_subset_before_any_fit_keeps_default() {
    let mut view = MapView::default();
    let none: Vec<Entity> = Vec::new();
    view.sync(&none);
    assert_eq!(view.viewport(), &Viewport::default());
}

#[test]
fn test_single_point_region_is_centered_with_extent() {
    let region = fit_region(&[at("madrid", 40.4168, -3.7038)], 0.01).unwrap();
    let center = region.center();

    assert!((center.lat - 40.4168).abs() < 1e-9);
    assert!((center.lng - -3.7038).abs() < 1e-9);
    assert!(region.span().lat > 0.0 && region.span().lng > 0.0);

    let mut view = MapView::default();
    view.sync(&[at("madrid", 40.4168, -3.7038)]);
    assert!(view.viewport().zoom.is_finite());
    assert!(view.viewport().zoom <= MapViewOptions::default().max_fit_zoom);
}

#[test]
fn test_fitted_viewport_shows_every_marker_inside_padding() {
    let entities = [
        at("bcn", 41.3874, 2.1686),
        at("sev", 37.3891, -5.9845),
        at("bio", 43.2630, -2.9350),
        at("lis", 38.7223, -9.1393),
    ];
    let mut view = MapView::default();
    view.sync(&entities);

    let viewport = view.viewport();
    let padding = view.options().fit_padding_px;
    for entity in &entities {
        let pixel = viewport.lat_lng_to_pixel(&entity.position());
        assert!(pixel.x >= padding - 1e-6 && pixel.x <= viewport.size.x - padding + 1e-6);
        assert!(pixel.y >= padding - 1e-6 && pixel.y <= viewport.size.y - padding + 1e-6);
    }
}

#[test]
fn test_refit_is_idempotent() {
    let entities = [at("a", 43.26, -2.93), at("b", 37.38, -5.98)];
    let mut view = MapView::default();

    view.sync(&entities);
    let first = view.viewport().clone();
    view.sync(&entities);
    view.fit_bounds(&entities);

    assert_eq!(view.viewport(), &first);
}

#[test]
fn test_invalid_coordinates_do_not_break_fit() {
    let entities = [at("ok", 40.0, -3.0), at("nan", f64::NAN, f64::NAN)];
    let mut view = MapView::default();

    assert!(matches!(view.sync(&entities), FitOutcome::Fitted(_)));
    assert_eq!(view.markers().len(), 1);
    assert!(view.viewport().center.lat.is_finite());
}

#[test]
fn test_custom_profile_changes_fit() {
    let entities = [at("a", 40.4168, -3.7038)];
    let compact = MapViewProfile::Compact.resolve();
    let mut view = MapView::new(compact.clone());
    view.sync(&entities);

    assert!(view.viewport().zoom <= compact.max_fit_zoom);
    assert_eq!(view.viewport().size, compact.size);
}
