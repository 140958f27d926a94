//! Configuration validation for the mirroring tool.
//!
//! This module answers two questions before any mirroring action executes:
//! - Is the global configuration well-formed? ([`validate_configuration`])
//! - Are the per-project overrides well-formed, given the runtime environment?
//!   ([`validate_project_configuration`])
//!
//! Both checks fail closed: any anomaly (an unrecognized option, a project
//! name that does not compile as a regex, a missing or non-executable hook
//! file) rejects the configuration. Rejections are reported as a
//! failing [`CheckResult`] carrying the first [`Violation`] found; only
//! unexpected faults (e.g. an unreadable hook directory) surface as errors.

mod global;
mod project;
mod types;


pub use global::validate_configuration;
pub use project::validate_project_configuration;
pub use types::{CheckResult, Violation};

use tracing::error;

/// Log and convert a violation into a failing result.
pub(crate) fn reject(violation: Violation) -> CheckResult {
    error!(%violation, "configuration rejected");
    CheckResult::fail(violation)
}
