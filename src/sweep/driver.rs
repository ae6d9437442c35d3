//! Sweep driver: sequential Cartesian sweep over the configured catalogs.

use crate::checker::Checker;
use crate::core::SweepRow;
use crate::{BenchError, BenchResult};

use super::config::{FailurePolicy, SweepConfig};

/// Run the full sweep and return the collected rows in iteration order.
///
/// Programs outer, then suffixes, then flag sets, then rounds. One row per
/// invocation; exactly `config.point_count()` rows on success. The checker
/// runs strictly sequentially with a full wait between invocations.
///
/// Launch failures abort the sweep. A finished checker with a non-zero exit
/// follows `config.on_failure`: abort with an error, or append a row with
/// the `error` sentinel in the runtime field and continue.
pub fn run_sweep(checker: &dyn Checker, config: &SweepConfig) -> BenchResult<Vec<SweepRow>> {
    config.validate()?;

    let timeout = config.timeout();
    let mut rows = Vec::with_capacity(config.point_count());

    for point in config.points() {
        let label = point.label();
        let program_path = config.program_path(&label);
        let type_path = config.type_path(&label);

        println!(
            "Running: {} {} [{}/{}]",
            label,
            point.flags.join(" "),
            point.round,
            config.rounds
        );
        tracing::debug!(
            program = %program_path.display(),
            types = %type_path.display(),
            flags = ?point.flags,
            round = point.round,
            "invoking checker"
        );

        let output = checker.check(&program_path, &type_path, &point.flags, timeout)?;

        if output.exit_success {
            rows.push(SweepRow::new(&label, &point.flags, output.runtime));
        } else {
            match config.on_failure {
                FailurePolicy::Abort => {
                    return Err(BenchError::Message(format!(
                        "checker failed on {} {} [{}/{}]",
                        label,
                        point.flags.join(" "),
                        point.round,
                        config.rounds
                    )));
                }
                FailurePolicy::Record => {
                    tracing::warn!(program = %label, flags = ?point.flags, "checker exited non-zero, recording error row");
                    rows.push(SweepRow::error(&label, &point.flags));
                }
            }
        }
    }

    Ok(rows)
}
