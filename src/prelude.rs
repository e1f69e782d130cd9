//! Prelude module for common sacabollos types and traits
//!
//! This module re-exports the most commonly used types for easy importing
//! with `use sacabollos::prelude::*;`

pub use crate::core::{
    config::{DirectoryConfig, MapViewOptions, MapViewProfile},
    coordinator::{ContactRequest, ViewCoordinator},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::data::dataset::{specialty_catalog, Dataset};

pub use crate::directory::{
    entity::{Entity, EntityId, EntityKind},
    filter::{compute_visible, CriteriaField, FilterCriteria, KindFilter},
};

pub use crate::input::events::{EventHandled, InputEvent, ViewMode};

pub use crate::layers::marker::{EntityMarker, MarkerLayer, MarkerStyle};

pub use crate::ui::{
    list_view::{EntityCard, ListView},
    map_view::{fit_region, FitOutcome, MapView},
    popup::{EntityAction, MarkerPopup},
};

#[cfg(feature = "egui")]
pub use crate::ui::widget::DirectoryWidget;

pub use crate::{Error as DirectoryError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
