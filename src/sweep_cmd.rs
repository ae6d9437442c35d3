//! `sweep` and `list` commands: the config-driven benchmark sweep.

use std::path::PathBuf;

use crate::checker::{CliChecker, CliCheckerConfig};
use crate::core::EnvironmentInfo;
use crate::storage::CsvExporter;
use crate::sweep::{run_sweep, FailurePolicy, SweepConfig};
use crate::BenchResult;

fn now_string() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".to_string())
}

/// Command-line overrides applied on top of the config file (or defaults).
#[derive(Debug, Default)]
pub struct SweepOverrides {
    pub checker: Option<PathBuf>,
    pub programs_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub rounds: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub on_failure: Option<FailurePolicy>,
}

fn resolve_config(
    config_path: Option<PathBuf>,
    overrides: SweepOverrides,
) -> BenchResult<SweepConfig> {
    let mut cfg = match config_path {
        Some(p) => SweepConfig::load(&p)?,
        None => SweepConfig::default(),
    };
    if let Some(checker) = overrides.checker {
        cfg.checker = checker;
    }
    if let Some(dir) = overrides.programs_dir {
        cfg.programs_dir = dir;
    }
    if let Some(out) = overrides.out {
        cfg.out = out;
    }
    if let Some(rounds) = overrides.rounds {
        cfg.rounds = rounds;
    }
    if let Some(secs) = overrides.timeout_secs {
        cfg.timeout_secs = secs;
    }
    if let Some(policy) = overrides.on_failure {
        cfg.on_failure = policy;
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Run the full sweep and write the result CSV.
pub fn run(config_path: Option<PathBuf>, overrides: SweepOverrides) -> BenchResult<()> {
    let cfg = resolve_config(config_path, overrides)?;
    let checker = CliChecker::new(CliCheckerConfig::new(&cfg.checker).with_timeout(cfg.timeout()));

    let env = EnvironmentInfo::detect_with_checker(&cfg.checker);
    tracing::info!(
        started_at = %now_string(),
        checker = %cfg.checker.display(),
        checker_version = ?env.checker_version,
        os = %env.os,
        cpu = ?env.cpu_model,
        points = cfg.point_count(),
        "starting sweep"
    );

    let rows = run_sweep(&checker, &cfg)?;

    CsvExporter::new().export(&rows, &cfg.out)?;
    println!("sweep: wrote {} rows to {}", rows.len(), cfg.out.display());
    Ok(())
}

/// Print the sweep plan without running anything.
pub fn list(config_path: Option<PathBuf>) -> BenchResult<()> {
    let cfg = resolve_config(config_path, SweepOverrides::default())?;
    for point in cfg.points() {
        println!(
            "{} {} [{}/{}]",
            point.label(),
            point.flags.join(" "),
            point.round,
            cfg.rounds
        );
    }
    Ok(())
}
