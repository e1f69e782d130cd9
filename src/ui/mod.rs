pub mod list_view;
pub mod map_view;
pub mod popup;

#[cfg(feature = "egui")]
pub mod widget;

pub use list_view::{EntityCard, ListView};
pub use map_view::{fit_region, FitOutcome, MapView};
pub use popup::{EntityAction, MarkerPopup};

#[cfg(feature = "egui")]
pub use widget::DirectoryWidget;
