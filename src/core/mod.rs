//! Core schema and environment types.

pub mod env;
pub mod schema;

pub use env::EnvironmentInfo;
pub use schema::{SweepRow, ERROR_RUNTIME};
