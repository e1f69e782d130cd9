pub mod marker;

pub use marker::{EntityMarker, MarkerLayer, MarkerStyle};
