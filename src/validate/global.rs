//! Top-level configuration check.

use serde_yaml::Mapping;

use super::types::{CheckResult, Violation};
use super::{project, reject};
use crate::schema;

/// Validate the global mirror configuration.
///
/// Every top-level key must be a recognized global option; the first unknown
/// key rejects the whole configuration. An empty configuration is valid.
///
/// The `projects` value is deliberately not re-validated here: per-project
/// overrides carry environment-dependent checks (proxy availability, hook
/// directory) that only [`validate_project_configuration`] can perform, so
/// callers invoke that separately.
///
/// [`validate_project_configuration`]: super::validate_project_configuration
///
/// # Example
///
/// ```
/// use mirror_config::validate_configuration;
/// use serde_yaml::Mapping;
///
/// let config: Mapping = serde_yaml::from_str("proxy: proxy.example.com:3128\nprojects: {}")?;
/// assert!(validate_configuration(&config).passed);
/// # Ok::<(), serde_yaml::Error>(())
/// ```
pub fn validate_configuration(config: &Mapping) -> CheckResult {
    for (key, _) in config {
        let Some(option) = key.as_str() else {
            return reject(Violation::UnknownOption {
                option: project::key_display(key),
            });
        };
        if !schema::is_global_option(option) {
            return reject(Violation::UnknownOption {
                option: option.to_string(),
            });
        }
    }

    CheckResult::pass()
}
