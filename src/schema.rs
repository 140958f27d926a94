//! Recognized configuration option names.
//!
//! This is the option schema registry: the fixed sets of option names the
//! mirroring tool understands at the global and per-project levels, plus the
//! recognized hook names. Pure data and membership lookups; nothing here is
//! mutated at runtime.

/// Global option: mapping of project name to per-project overrides.
pub const PROJECTS_PROPERTY: &str = "projects";
/// Proxy to use for outbound version-control traffic.
pub const PROXY_PROPERTY: &str = "proxy";
/// Directory for per-project mirror logs.
pub const LOGDIR_PROPERTY: &str = "logdir";
/// Repository-type specific command overrides.
pub const COMMANDS_PROPERTY: &str = "commands";
/// Directory containing hook executables.
pub const HOOKDIR_PROPERTY: &str = "hookdir";
/// Timeout in seconds for mirror commands.
pub const CMD_TIMEOUT_PROPERTY: &str = "command_timeout";
/// Timeout in seconds for hook executions.
pub const HOOK_TIMEOUT_PROPERTY: &str = "hook_timeout";
/// Per-project option: skip mirroring for this project.
pub const DISABLED_PROPERTY: &str = "disabled";
/// Per-project option: repositories to exclude from mirroring.
pub const IGNORED_REPOS_PROPERTY: &str = "ignored_repos";
/// Per-project option: mapping of hook name to hook file.
pub const HOOKS_PROPERTY: &str = "hooks";

/// Options recognized at the top level of the configuration.
pub const GLOBAL_OPTIONS: &[&str] = &[
    PROJECTS_PROPERTY,
    PROXY_PROPERTY,
    LOGDIR_PROPERTY,
    COMMANDS_PROPERTY,
    HOOKDIR_PROPERTY,
    CMD_TIMEOUT_PROPERTY,
    HOOK_TIMEOUT_PROPERTY,
];

/// Options recognized inside a per-project override block.
pub const PROJECT_OPTIONS: &[&str] = &[
    PROXY_PROPERTY,
    HOOKS_PROPERTY,
    IGNORED_REPOS_PROPERTY,
    DISABLED_PROPERTY,
    CMD_TIMEOUT_PROPERTY,
    HOOK_TIMEOUT_PROPERTY,
];

/// Lifecycle points at which a hook may run.
pub const HOOK_NAMES: &[&str] = &["pre", "post"];

/// Whether `name` is a recognized top-level option.
pub fn is_global_option(name: &str) -> bool {
    GLOBAL_OPTIONS.contains(&name)
}

/// Whether `name` is a recognized per-project override option.
pub fn is_project_option(name: &str) -> bool {
    PROJECT_OPTIONS.contains(&name)
}

/// Whether `name` is a recognized hook name.
pub fn is_hook_name(name: &str) -> bool {
    HOOK_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_options_recognized() {
        assert!(is_global_option(PROJECTS_PROPERTY));
        assert!(is_global_option(PROXY_PROPERTY));
        assert!(is_global_option(HOOKDIR_PROPERTY));
        assert!(!is_global_option("nonexistent"));
    }

    #[test]
    fn project_options_recognized() {
        assert!(is_project_option(PROXY_PROPERTY));
        assert!(is_project_option(IGNORED_REPOS_PROPERTY));
        assert!(is_project_option(HOOKS_PROPERTY));
        assert!(is_project_option(DISABLED_PROPERTY));
        // Recognized globally but not per project.
        assert!(!is_project_option(PROJECTS_PROPERTY));
        assert!(!is_project_option(LOGDIR_PROPERTY));
    }

    #[test]
    fn hook_names_recognized() {
        assert!(is_hook_name("pre"));
        assert!(is_hook_name("post"));
        assert!(!is_hook_name("blah"));
    }
}
