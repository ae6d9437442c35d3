//! Sweep configuration and driver.

pub mod config;
pub mod driver;

pub use config::{FailurePolicy, SweepConfig, SweepPoint};
pub use driver::run_sweep;
