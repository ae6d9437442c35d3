//! Mock checker for testing.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crate::BenchResult;

use super::traits::{CheckOutput, Checker};

/// One recorded invocation of the mock checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockInvocation {
    pub program: PathBuf,
    pub types: PathBuf,
    pub flags: Vec<String>,
}

/// Configuration for mock checker responses.
#[derive(Debug, Clone)]
pub struct MockCheckerConfig {
    /// Name to report
    pub name: String,
    /// Version to report
    pub version: Option<String>,
    /// Runtime text to return from every invocation
    pub runtime: String,
    /// Whether check should fail as a launch failure
    pub launch_fails: bool,
    /// Whether the simulated process should exit non-zero
    pub exit_fails: bool,
}

impl MockCheckerConfig {
    /// Create a new mock config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        MockCheckerConfig {
            name: name.into(),
            version: Some("mock-1.0.0".to_string()),
            runtime: "0.001".to_string(),
            launch_fails: false,
            exit_fails: false,
        }
    }

    /// Set the runtime text returned by every invocation.
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// Make check fail as if the executable could not be launched.
    pub fn launch_fails(mut self) -> Self {
        self.launch_fails = true;
        self
    }

    /// Make the simulated process exit with a failure status.
    pub fn exit_fails(mut self) -> Self {
        self.exit_fails = true;
        self
    }
}

impl Default for MockCheckerConfig {
    fn default() -> Self {
        MockCheckerConfig::new("mock")
    }
}

/// Mock checker for unit testing.
///
/// Returns configurable fake results without spawning any process, and
/// records every invocation so tests can assert on constructed paths and
/// pass-through flags.
pub struct MockChecker {
    config: MockCheckerConfig,
    invocations: Mutex<Vec<MockInvocation>>,
}

impl MockChecker {
    /// Create a new mock checker with the given configuration.
    pub fn new(config: MockCheckerConfig) -> Self {
        MockChecker {
            config,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock checker that always prints the given runtime.
    pub fn with_runtime(runtime: impl Into<String>) -> Self {
        Self::new(MockCheckerConfig::new("mock").with_runtime(runtime))
    }

    /// Invocations recorded so far, in call order.
    pub fn invocations(&self) -> Vec<MockInvocation> {
        self.invocations.lock().expect("mock lock poisoned").clone()
    }
}

impl Checker for MockChecker {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn version(&self) -> Option<String> {
        self.config.version.clone()
    }

    fn check(
        &self,
        program: &Path,
        types: &Path,
        flags: &[String],
        _timeout: Duration,
    ) -> BenchResult<CheckOutput> {
        if self.config.launch_fails {
            return Err(crate::BenchError::Message("mock launch failed".into()));
        }
        self.invocations
            .lock()
            .expect("mock lock poisoned")
            .push(MockInvocation {
                program: program.to_path_buf(),
                types: types.to_path_buf(),
                flags: flags.to_vec(),
            });
        Ok(CheckOutput {
            runtime: self.config.runtime.trim().to_string(),
            exit_success: !self.config.exit_fails,
            wall_ms: 1,
        })
    }
}
