//! Verdict and violation types for configuration validation.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A single reason a configuration was rejected.
///
/// Every variant carries the offending key or path so callers and tests can
/// assert on why validation failed, not just that it failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Violation {
    /// Unrecognized option at the top level of the configuration.
    #[error("unrecognized global option '{option}'")]
    UnknownOption { option: String },

    /// Unrecognized option inside a per-project override block.
    #[error("unrecognized option '{option}' for project '{project}'")]
    UnknownProjectOption { project: String, option: String },

    /// Project name does not compile as a regular expression. Project names
    /// are used as match patterns against repository paths later on.
    #[error("project name '{project}' is not a valid regular expression: {reason}")]
    InvalidProjectPattern { project: String, reason: String },

    /// Project entry is not a mapping of option names to values, or its name
    /// is not a string.
    #[error("project entry '{project}' is not a mapping of option names to values")]
    MalformedProjectEntry { project: String },

    /// The project asks for a proxy but none is available in this run.
    #[error("project '{project}' requires a proxy but no proxy is configured")]
    ProxyUnavailable { project: String },

    /// `ignored_repos` must be a plain list of repository names, not a
    /// key-value structure.
    #[error("ignored repositories for project '{project}' must be a list of repository names")]
    IgnoredReposNotList { project: String },

    /// The hooks override is not a mapping of hook name to file name.
    #[error("hooks for project '{project}' must be a mapping of hook name to file name")]
    MalformedHooks { project: String },

    /// Hooks are configured but no hook directory was supplied, so the hook
    /// files cannot be resolved.
    #[error("project '{project}' configures hooks but no hook directory was supplied")]
    NoHookDirectory { project: String },

    /// A hook name outside the recognized lifecycle points.
    #[error("unknown hook name '{hook}' for project '{project}'")]
    UnknownHookName { project: String, hook: String },

    /// A referenced hook file does not exist inside the hook directory.
    #[error("hook file '{}' for project '{project}' does not exist", path.display())]
    HookNotFound { project: String, path: PathBuf },

    /// The hook file exists but its owner cannot execute it.
    #[error("hook file '{}' for project '{project}' is not executable", path.display())]
    HookNotExecutable { project: String, path: PathBuf },
}

/// Result of a configuration check.
///
/// Boolean-equivalent verdict: `passed` preserves the pass/fail contract,
/// while `violations` records why a failing check failed. Validation is
/// fail-fast, so a failing result holds the first violation found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Whether the check passed.
    pub passed: bool,
    /// The violations found (empty if passed).
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    /// Create a failing result from the violation that stopped validation.
    pub fn fail(violation: Violation) -> Self {
        Self {
            passed: false,
            violations: vec![violation],
        }
    }

    /// Format the result as a user-facing error message.
    pub fn format_error(&self) -> String {
        if self.passed {
            return String::new();
        }

        let mut msg = String::from("Configuration check failed\n\n");
        for violation in &self.violations {
            msg.push_str(&format!("  x {}\n", violation));
        }
        msg
    }
}
