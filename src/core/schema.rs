//! Result row schema for sweep output.

use serde::{Deserialize, Serialize};

/// Sentinel recorded in the runtime field for a failed invocation when the
/// sweep runs under the record-and-continue policy.
pub const ERROR_RUNTIME: &str = "error";

/// One measurement row, appended per checker invocation.
///
/// Rows are append-only and intentionally non-unique: repeated measurements
/// of the same configuration are the point of the sweep. Row order equals
/// iteration order and downstream consumers rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRow {
    /// Program identifier with variant suffix, no separator (e.g. `ipv4_ttl_safe`)
    pub program: String,
    /// Space-joined flag tokens; empty string for the no-flag case
    pub flags: String,
    /// Verbatim trimmed checker stdout; opaque text, never parsed
    pub runtime: String,
}

impl SweepRow {
    /// Create a row from a label, a flag set, and the captured runtime text.
    pub fn new(program: impl Into<String>, flags: &[String], runtime: impl Into<String>) -> Self {
        SweepRow {
            program: program.into(),
            flags: flags.join(" "),
            runtime: runtime.into(),
        }
    }

    /// Create an error-marked row for a failed invocation.
    pub fn error(program: impl Into<String>, flags: &[String]) -> Self {
        Self::new(program, flags, ERROR_RUNTIME)
    }
}
