//! Checker trait and output type for the external tool abstraction.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::BenchResult;

/// Output from a single checker invocation.
///
/// The checker is trusted to print one runtime figure to stdout; the harness
/// records that text verbatim (whitespace-trimmed) and never parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whitespace-trimmed stdout of the checker, recorded as-is
    pub runtime: String,
    /// Whether the checker exited with a success status
    pub exit_success: bool,
    /// Harness-side wall clock for the invocation, in milliseconds
    pub wall_ms: u128,
}

/// Unified checker trait for type-checking tools under benchmark.
///
/// A `check` call that manages to launch the process and see it finish is
/// `Ok`, even when the tool exits non-zero; `exit_success` carries the exit
/// status and the sweep driver owns the failure policy. Only launch failures
/// and timeouts are errors.
pub trait Checker: Send + Sync {
    /// Returns the checker name (e.g., "pi4", "mock").
    fn name(&self) -> &str;

    /// Returns the checker version, if detectable.
    fn version(&self) -> Option<String>;

    /// Run the checker once over a program/type-annotation pair.
    ///
    /// # Arguments
    /// * `program` - Path to the `.pi4` program file
    /// * `types` - Path to the `.pi4_type` annotation file
    /// * `flags` - Optional flags passed through verbatim after the fixed args
    /// * `timeout` - Maximum wall time; zero means wait forever
    fn check(
        &self,
        program: &Path,
        types: &Path,
        flags: &[String],
        timeout: Duration,
    ) -> BenchResult<CheckOutput>;
}
