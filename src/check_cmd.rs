//! `check` command: a single checker invocation, for spot measurements.

use std::path::PathBuf;
use std::time::Duration;

use crate::checker::{Checker, CliChecker, CliCheckerConfig};
use crate::{BenchError, BenchResult};

/// Run the checker once and print the runtime it reports.
pub fn run(
    program: PathBuf,
    types: Option<PathBuf>,
    checker_path: Option<PathBuf>,
    timeout_secs: u64,
    flags: Vec<String>,
) -> BenchResult<()> {
    // Default the type file to the program path with the annotation extension
    let types = types.unwrap_or_else(|| {
        let mut p = program.clone();
        p.set_extension("pi4_type");
        p
    });

    let config = match checker_path {
        Some(p) => CliCheckerConfig::new(p),
        None => CliCheckerConfig::default(),
    };
    let checker = CliChecker::new(config);

    let output = checker.check(&program, &types, &flags, Duration::from_secs(timeout_secs))?;
    if !output.exit_success {
        return Err(BenchError::Message(format!(
            "checker failed on {}",
            program.display()
        )));
    }

    println!("{}", output.runtime);
    tracing::debug!(wall_ms = output.wall_ms, "check finished");
    Ok(())
}
