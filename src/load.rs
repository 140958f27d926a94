//! Configuration loading.
//!
//! Reads the declarative mirror configuration from a YAML file or string into
//! the root mapping consumed by [`crate::validate`]. No validation happens
//! here; callers hand the result to the validator.

use crate::error::{ConfigError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Load the mirror configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Mapping> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loaded configuration file");
    parse_config(&content)
}

/// Parse the mirror configuration from a YAML string.
///
/// An empty document yields an empty mapping; any other non-mapping root is
/// rejected.
pub fn parse_config(text: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(text)?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ConfigError::RootNotMapping {
            found: value_shape(&other),
        }),
    }
}

fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_empty_document_yields_empty_mapping() {
        let config = parse_config("").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn parse_mapping_document() {
        let config = parse_config("proxy: proxy.example.com:3128\nprojects: {}\n").unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(
            config.get("proxy").and_then(Value::as_str),
            Some("proxy.example.com:3128")
        );
    }

    #[test]
    fn parse_sequence_root_is_rejected() {
        let err = parse_config("- one\n- two\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RootNotMapping { found: "sequence" }
        ));
    }

    #[test]
    fn parse_invalid_yaml_is_rejected() {
        let err = parse_config("projects: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_missing_file_surfaces_read_error() {
        let err = load_config("/nonexistent/mirror.yml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mirror.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "projects:").unwrap();
        writeln!(file, "  opengrok: {{}}").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.get("projects").is_some());
    }
}
