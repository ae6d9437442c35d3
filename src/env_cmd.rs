//! `env` command: print the host environment snapshot.

use std::path::PathBuf;

use crate::core::EnvironmentInfo;
use crate::{BenchError, BenchResult};

/// Print environment info as pretty JSON.
pub fn run(checker_path: Option<PathBuf>) -> BenchResult<()> {
    let env = match checker_path {
        Some(p) => EnvironmentInfo::detect_with_checker(&p),
        None => EnvironmentInfo::detect(),
    };
    let json = serde_json::to_string_pretty(&env)
        .map_err(|e| BenchError::Message(format!("failed to serialize environment: {e}")))?;
    println!("{json}");
    Ok(())
}
