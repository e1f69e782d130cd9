pub mod dataset;

pub use dataset::{specialty_catalog, Dataset, SPECIALTY_CATALOG};
