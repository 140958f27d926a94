//! Error types for the mirror-config crate.
//!
//! Uses thiserror for derive macros. Only genuinely unexpected faults travel
//! through this type; schema/consistency rejections are reported as
//! [`Violation`](crate::validate::Violation)s inside a failing
//! [`CheckResult`](crate::validate::CheckResult) instead, so a malformed
//! configuration never surfaces as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mirror-config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read at all.
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid YAML.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration parsed, but its root is not a mapping.
    #[error("configuration root must be a mapping, got {found}")]
    RootNotMapping { found: &'static str },

    /// A hook file could not be inspected for a reason other than absence
    /// (e.g. an unreadable hook directory). Absence itself is a violation,
    /// not an error.
    #[error("failed to inspect hook file '{}': {source}", path.display())]
    HookStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for mirror-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/mirror.yml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read configuration file '/etc/mirror.yml': no such file"
        );
    }

    #[test]
    fn root_not_mapping_error_names_the_shape() {
        let err = ConfigError::RootNotMapping { found: "sequence" };
        assert_eq!(
            err.to_string(),
            "configuration root must be a mapping, got sequence"
        );
    }
}
