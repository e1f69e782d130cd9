//! Engine-wide defaults derived from the Leaflet setup the directory ships with.
//! Keeping them in a single place makes it easier to tweak magic numbers.

/// Map center used until the first non-empty fit (Madrid).
pub const DEFAULT_CENTER: (f64, f64) = (40.4168, -3.7038);

/// Zoom level paired with [`DEFAULT_CENTER`].
pub const DEFAULT_ZOOM: f64 = 6.0;

/// Zoom range supported by OpenStreetMap tiles.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Upper zoom bound reachable through fitting, so a lone marker does not
/// zoom the camera all the way in.
pub const MAX_FIT_ZOOM: f64 = 15.0;

/// Pixel margin kept between fitted markers and the viewport edge.
pub const FIT_PADDING_PX: f64 = 20.0;

/// Smallest span (degrees) a fitted region may have on either axis.
pub const MIN_REGION_SPAN_DEG: f64 = 0.01;

/// Default viewport size in pixels.
pub const DEFAULT_VIEWPORT_SIZE: (f64, f64) = (800.0, 600.0);

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (u32, u32) = (12, 41);

/// Popup offset relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: (i32, i32) = (1, -34);

/// Number of specialties a list card shows before collapsing the rest.
pub const CARD_SPECIALTY_PREVIEW: usize = 3;
