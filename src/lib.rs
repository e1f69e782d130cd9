//! # SacaBollos
//!
//! Directory and map-exploration engine for dent-repair professionals and
//! companies.
//!
//! A static collection of listings is narrowed by four independent criteria
//! (name, location, kind, specialty) and shown either as markers on a map,
//! whose camera refits to the visible subset, or as a list of cards.

pub mod core;
pub mod data;
pub mod directory;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{DirectoryConfig, MapViewOptions, MapViewProfile},
    coordinator::{ContactRequest, ViewCoordinator},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::data::dataset::Dataset;

pub use directory::{
    entity::{Entity, EntityId, EntityKind},
    filter::{compute_visible, CriteriaField, FilterCriteria, KindFilter},
};

pub use input::events::{EventHandled, InputEvent, ViewMode};

pub use layers::marker::{EntityMarker, MarkerLayer, MarkerStyle};

pub use ui::{
    list_view::{EntityCard, ListView},
    map_view::{fit_region, FitOutcome, MapView},
    popup::{EntityAction, MarkerPopup},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),

    #[error("Entity {0} has an empty name")]
    EmptyName(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = DirectoryError;

/// Initializes `env_logger` honouring `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
