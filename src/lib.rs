//! mirror-config: schema and environment validation for repository-mirroring
//! configuration.
//!
//! The surrounding mirroring tool clones and updates source repositories from
//! a declarative YAML configuration. This crate is the predicate layer that
//! runs before any of that: it checks that the global configuration only uses
//! recognized options and that the per-project overrides are consistent with
//! the runtime environment (proxy availability, hook directory, file
//! permissions). It never mutates configuration and performs no network or
//! version-control operation.
//!
//! ```
//! use mirror_config::{parse_config, validate_configuration, validate_project_configuration};
//!
//! let config = parse_config(
//!     "{ proxy: 'proxy.example.com:3128', projects: { opengrok: { proxy: true } } }",
//! )?;
//! assert!(validate_configuration(&config).passed);
//!
//! let projects = config.get("projects").and_then(|v| v.as_mapping());
//! let verdict = validate_project_configuration(projects, true, None)?;
//! assert!(verdict.passed);
//! # Ok::<(), mirror_config::ConfigError>(())
//! ```

pub mod error;
pub mod load;
pub mod schema;
pub mod validate;

pub use error::{ConfigError, Result};
pub use load::{load_config, parse_config};
pub use validate::{CheckResult, Violation, validate_configuration, validate_project_configuration};
