//! Command-line checker implementation.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::{BenchError, BenchResult};

use super::traits::{CheckOutput, Checker};

/// Configuration for the command-line checker.
#[derive(Debug, Clone)]
pub struct CliCheckerConfig {
    /// Path to the checker executable
    pub checker_path: PathBuf,
    /// Default timeout for invocations; zero means no timeout
    pub default_timeout: Duration,
}

impl Default for CliCheckerConfig {
    fn default() -> Self {
        CliCheckerConfig {
            checker_path: PathBuf::from("../_build/default/benchmark/benchmark.exe"),
            default_timeout: Duration::ZERO,
        }
    }
}

impl CliCheckerConfig {
    /// Create a new config with the given checker path.
    pub fn new(checker_path: impl Into<PathBuf>) -> Self {
        CliCheckerConfig {
            checker_path: checker_path.into(),
            ..Default::default()
        }
    }

    /// Set the default timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }
}

/// Checker that shells out to the external Pi4 type-checker executable.
pub struct CliChecker {
    config: CliCheckerConfig,
}

impl CliChecker {
    /// Create a new checker with the given configuration.
    pub fn new(config: CliCheckerConfig) -> Self {
        CliChecker { config }
    }

    /// Create a checker with just the executable path.
    pub fn from_path(checker_path: impl Into<PathBuf>) -> Self {
        Self::new(CliCheckerConfig::new(checker_path))
    }

    /// Wait for the child with an optional timeout. Zero timeout waits forever.
    fn wait_with_timeout(
        &self,
        mut child: std::process::Child,
        timeout: Duration,
        start: Instant,
    ) -> BenchResult<(std::process::ExitStatus, String)> {
        loop {
            if let Some(status) = child
                .try_wait()
                .map_err(|e| BenchError::Message(e.to_string()))?
            {
                let mut stdout = String::new();
                if let Some(mut out) = child.stdout.take() {
                    out.read_to_string(&mut stdout)
                        .map_err(|e| BenchError::Message(format!("failed to read stdout: {e}")))?;
                }
                return Ok((status, stdout));
            }

            if timeout.as_secs() > 0 && start.elapsed() >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(BenchError::Message("checker timed out".into()));
            }

            std::thread::sleep(Duration::from_millis(10));
        }
    }

    /// Detect checker version from `--version`, if the tool supports it.
    fn detect_version(&self) -> Option<String> {
        Command::new(&self.config.checker_path)
            .arg("--version")
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl Checker for CliChecker {
    fn name(&self) -> &str {
        "pi4"
    }

    fn version(&self) -> Option<String> {
        self.detect_version()
    }

    fn check(
        &self,
        program: &Path,
        types: &Path,
        flags: &[String],
        timeout: Duration,
    ) -> BenchResult<CheckOutput> {
        let mut cmd = Command::new(&self.config.checker_path);
        cmd.arg(program).arg("-t").arg(types);
        for flag in flags {
            cmd.arg(flag);
        }

        // stderr is left on the console, matching the tool's interactive use
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let start = Instant::now();
        let child = cmd.spawn().map_err(|e| {
            BenchError::Message(format!(
                "failed to spawn checker {}: {e}",
                self.config.checker_path.display()
            ))
        })?;

        let (status, stdout) = self.wait_with_timeout(child, timeout, start)?;
        let wall_ms = start.elapsed().as_millis();

        Ok(CheckOutput {
            runtime: stdout.trim().to_string(),
            exit_success: status.success(),
            wall_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CliCheckerConfig::default();
        assert_eq!(
            config.checker_path,
            PathBuf::from("../_build/default/benchmark/benchmark.exe")
        );
        assert_eq!(config.default_timeout, Duration::ZERO);
    }

    #[test]
    fn test_config_builder() {
        let config =
            CliCheckerConfig::new("/usr/local/bin/pi4").with_timeout(Duration::from_secs(60));
        assert_eq!(config.checker_path, PathBuf::from("/usr/local/bin/pi4"));
        assert_eq!(config.default_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_checker_name() {
        let checker = CliChecker::from_path("pi4");
        assert_eq!(checker.name(), "pi4");
    }

    #[test]
    fn test_check_missing_executable_is_launch_failure() {
        let checker = CliChecker::from_path("/nonexistent/pi4-checker-binary");
        let result = checker.check(
            Path::new("a.pi4"),
            Path::new("a.pi4_type"),
            &[],
            Duration::ZERO,
        );
        assert!(result.is_err());
    }
}
