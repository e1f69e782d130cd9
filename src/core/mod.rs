pub mod config;
pub mod constants;
pub mod coordinator;
pub mod geo;
pub mod viewport;
