pub mod entity;
pub mod filter;

pub use entity::{Entity, EntityId, EntityKind};
pub use filter::{compute_visible, visible_indices, CriteriaField, FilterCriteria, KindFilter};
