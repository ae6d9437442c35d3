//! Sweep configuration: the fixed catalogs and plan enumeration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::{BenchError, BenchResult};

/// What to do when the checker finishes with a non-zero exit status.
///
/// Launch failures (missing executable, timeout) are always fatal regardless
/// of this policy; no CSV is written for an aborted sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole sweep on the first failed invocation
    #[default]
    Abort,
    /// Record an error-marked row for the failed invocation and continue
    Record,
}

/// One point of the Cartesian sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPoint {
    pub program: String,
    pub suffix: String,
    pub flags: Vec<String>,
    /// 1-based repetition index
    pub round: u32,
}

impl SweepPoint {
    /// Program identifier with suffix appended, no separator.
    pub fn label(&self) -> String {
        format!("{}{}", self.program, self.suffix)
    }
}

/// Immutable sweep configuration.
///
/// The defaults reproduce the original Pi4 benchmark catalog; every field
/// can be overridden from a TOML file or the CLI.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Benchmark program identifiers
    #[serde(default = "default_programs")]
    pub programs: Vec<String>,
    /// Variant suffixes appended verbatim to each program identifier
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    /// Flag combinations passed through to the checker
    #[serde(default = "default_flag_sets")]
    pub flag_sets: Vec<Vec<String>>,
    /// Repetitions per (program, suffix, flag set) triple
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// Directory holding the `.pi4` / `.pi4_type` artifact pairs
    #[serde(default = "default_programs_dir")]
    pub programs_dir: PathBuf,
    /// Path to the checker executable
    #[serde(default = "default_checker")]
    pub checker: PathBuf,
    /// Output CSV path, overwritten on each run
    #[serde(default = "default_out")]
    pub out: PathBuf,
    /// Per-invocation timeout in seconds; zero means no timeout
    #[serde(default)]
    pub timeout_secs: u64,
    /// Policy for non-zero checker exits
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

fn default_programs() -> Vec<String> {
    [
        "determined_forwarding",
        "header_dependency",
        "ipv4_opt",
        "ipv4_ttl",
        "vlan_decap",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_suffixes() -> Vec<String> {
    vec!["_safe".to_string(), "_unsafe".to_string()]
}

fn default_flag_sets() -> Vec<Vec<String>> {
    vec![
        vec![],
        vec!["-f".to_string()],
        vec!["-i".to_string()],
        vec!["-n".to_string()],
        vec!["-d".to_string()],
        vec!["-f".to_string(), "-i".to_string(), "-n".to_string(), "-d".to_string()],
    ]
}

fn default_rounds() -> u32 {
    10
}

fn default_programs_dir() -> PathBuf {
    PathBuf::from("./programs")
}

fn default_checker() -> PathBuf {
    PathBuf::from("../_build/default/benchmark/benchmark.exe")
}

fn default_out() -> PathBuf {
    PathBuf::from("./results.csv")
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            programs: default_programs(),
            suffixes: default_suffixes(),
            flag_sets: default_flag_sets(),
            rounds: default_rounds(),
            programs_dir: default_programs_dir(),
            checker: default_checker(),
            out: default_out(),
            timeout_secs: 0,
            on_failure: FailurePolicy::default(),
        }
    }
}

impl SweepConfig {
    /// Load a sweep config from a TOML file; absent fields take defaults.
    pub fn load(path: &Path) -> BenchResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            BenchError::Message(format!("failed to read config {}: {e}", path.display()))
        })?;
        let cfg: SweepConfig = toml::from_str(&s).map_err(|e| {
            BenchError::Message(format!("failed to parse config {}: {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check catalog invariants.
    pub fn validate(&self) -> BenchResult<()> {
        if self.programs.is_empty() {
            return Err(BenchError::Message("programs catalog is empty".into()));
        }
        if self.suffixes.is_empty() {
            return Err(BenchError::Message("suffixes catalog is empty".into()));
        }
        if self.flag_sets.is_empty() {
            return Err(BenchError::Message("flag_sets catalog is empty".into()));
        }
        if self.rounds == 0 {
            return Err(BenchError::Message("rounds must be positive".into()));
        }
        Ok(())
    }

    /// Total number of sweep points.
    pub fn point_count(&self) -> usize {
        self.programs.len() * self.suffixes.len() * self.flag_sets.len() * self.rounds as usize
    }

    /// Enumerate the full plan in nested order: programs outer, then
    /// suffixes, then flag sets, then rounds 1..=R.
    pub fn points(&self) -> Vec<SweepPoint> {
        let mut points = Vec::with_capacity(self.point_count());
        for program in &self.programs {
            for suffix in &self.suffixes {
                for flags in &self.flag_sets {
                    for round in 1..=self.rounds {
                        points.push(SweepPoint {
                            program: program.clone(),
                            suffix: suffix.clone(),
                            flags: flags.clone(),
                            round,
                        });
                    }
                }
            }
        }
        points
    }

    /// Path to the `.pi4` program file for a label.
    pub fn program_path(&self, label: &str) -> PathBuf {
        self.programs_dir.join(format!("{label}.pi4"))
    }

    /// Path to the `.pi4_type` annotation file for a label.
    pub fn type_path(&self, label: &str) -> PathBuf {
        self.programs_dir.join(format!("{label}.pi4_type"))
    }

    /// Per-invocation timeout as a Duration; zero means no timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
