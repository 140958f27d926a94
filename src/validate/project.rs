//! Per-project override checks.
//!
//! Implements the environment-dependent half of configuration validation:
//! regex compilability of project names, proxy availability, the shape of
//! `ignored_repos`, and resolution of hook files inside the hook directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use super::reject;
use super::types::{CheckResult, Violation};
use crate::error::{ConfigError, Result};
use crate::schema;

/// Validate the per-project override blocks against the schema and the
/// runtime environment.
///
/// * `config` - the `projects` mapping, or `None` when the configuration has
///   no per-project overrides. Absent or empty configurations are trivially
///   valid.
/// * `proxy_available` - whether this run has a proxy; a project that asks
///   for one when there is none is rejected.
/// * `hook_dir` - directory hook files are resolved in, as
///   `hook_dir/<filename>` with no subdirectory traversal.
///
/// Validation is fail-fast: the first violation rejects the entire batch.
/// Filesystem access is limited to read-only stat calls on hook files; a stat
/// failure other than absence (e.g. permission denied on the directory)
/// surfaces as [`ConfigError::HookStat`] rather than a verdict, since masking
/// it would hide an environment problem.
pub fn validate_project_configuration(
    config: Option<&Mapping>,
    proxy_available: bool,
    hook_dir: Option<&Path>,
) -> Result<CheckResult> {
    let Some(config) = config else {
        return Ok(CheckResult::pass());
    };

    for (name, overrides) in config {
        let Some(project) = name.as_str() else {
            return Ok(reject(Violation::MalformedProjectEntry {
                project: key_display(name),
            }));
        };

        // Project names double as match patterns later on.
        if let Err(err) = Regex::new(project) {
            return Ok(reject(Violation::InvalidProjectPattern {
                project: project.to_string(),
                reason: err.to_string(),
            }));
        }

        let Some(overrides) = overrides.as_mapping() else {
            return Ok(reject(Violation::MalformedProjectEntry {
                project: project.to_string(),
            }));
        };

        // Schema membership first: an unrecognized option rejects the batch
        // before any semantic check runs.
        for (key, _) in overrides {
            let option = key.as_str().unwrap_or_default();
            if !schema::is_project_option(option) {
                return Ok(reject(Violation::UnknownProjectOption {
                    project: project.to_string(),
                    option: key_display(key),
                }));
            }
        }

        if overrides.get(schema::PROXY_PROPERTY).is_some() && !proxy_available {
            return Ok(reject(Violation::ProxyUnavailable {
                project: project.to_string(),
            }));
        }

        if let Some(ignored) = overrides.get(schema::IGNORED_REPOS_PROPERTY) {
            if !is_string_list(ignored) {
                return Ok(reject(Violation::IgnoredReposNotList {
                    project: project.to_string(),
                }));
            }
        }

        if let Some(hooks) = overrides.get(schema::HOOKS_PROPERTY) {
            if let Some(violation) = check_hooks(project, hooks, hook_dir)? {
                return Ok(reject(violation));
            }
        }
    }

    Ok(CheckResult::pass())
}

/// Check a project's hooks mapping against the hook directory.
///
/// Returns the first violation found, or `None` when every hook resolves to
/// an existing (and, on POSIX, owner-executable) file.
fn check_hooks(
    project: &str,
    hooks: &Value,
    hook_dir: Option<&Path>,
) -> Result<Option<Violation>> {
    let Some(hooks) = hooks.as_mapping() else {
        return Ok(Some(Violation::MalformedHooks {
            project: project.to_string(),
        }));
    };

    let Some(dir) = hook_dir else {
        return Ok(Some(Violation::NoHookDirectory {
            project: project.to_string(),
        }));
    };

    for (name, file) in hooks {
        let hook = name.as_str().unwrap_or_default();
        if !schema::is_hook_name(hook) {
            return Ok(Some(Violation::UnknownHookName {
                project: project.to_string(),
                hook: key_display(name),
            }));
        }

        let Some(file) = file.as_str() else {
            return Ok(Some(Violation::MalformedHooks {
                project: project.to_string(),
            }));
        };

        let path = dir.join(file);
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Some(Violation::HookNotFound {
                    project: project.to_string(),
                    path,
                }));
            }
            Err(source) => return Err(ConfigError::HookStat { path, source }),
        };

        if !metadata.is_file() {
            return Ok(Some(Violation::HookNotFound {
                project: project.to_string(),
                path,
            }));
        }

        // The execute bit only exists on POSIX filesystems; elsewhere the
        // hook is accepted as long as the file exists.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            if metadata.permissions().mode() & 0o100 == 0 {
                return Ok(Some(Violation::HookNotExecutable {
                    project: project.to_string(),
                    path,
                }));
            }
        }
    }

    Ok(None)
}

/// Whether `value` is a plain list of repository names. A key-value structure
/// fails this even if its entries are individually well-typed.
fn is_string_list(value: &Value) -> bool {
    match value {
        Value::Sequence(items) => items.iter().all(Value::is_string),
        _ => false,
    }
}

/// Render a mapping key for a violation message. Keys are normally strings;
/// anything else is shown in its YAML form.
pub(super) fn key_display(key: &Value) -> String {
    match key.as_str() {
        Some(s) => s.to_string(),
        None => serde_yaml::to_string(key)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| String::from("<unprintable>")),
    }
}
