//! Replay configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

/// Settings that may come from the environment (or a `.env` file).
///
/// Command-line flags override these in the binary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Stop after this many decisions.
    pub max_turns: Option<usize>,
    /// Also write logs to `<log_dir>/replay.log`.
    pub log_dir: Option<PathBuf>,
}

impl ReplayConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARRIOR_MAX_TURNS` - Turn cap (default: unlimited, minimum 1)
    /// - `WARRIOR_LOG_DIR` - Directory for the log file (default: no file logging)
    /// - `WARRIOR_LOG_FILE` - Enable file logging in the platform cache directory
    ///   when `WARRIOR_LOG_DIR` is unset (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(max) = read_env::<usize, _>(&lookup, "WARRIOR_MAX_TURNS") {
            config.max_turns = Some(max.max(1));
        }

        config.log_dir = lookup("WARRIOR_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if config.log_dir.is_none() && read_env_bool(&lookup, "WARRIOR_LOG_FILE") == Some(true) {
            config.log_dir = Some(default_log_dir());
        }

        config
    }
}

/// Platform cache directory for replay logs.
///
/// - macOS: `~/Library/Caches/warrior/logs`
/// - Linux: `~/.cache/warrior/logs` (or `$XDG_CACHE_HOME/warrior/logs`)
/// - Windows: `%LOCALAPPDATA%\warrior\logs`
/// - Fallback: `/tmp/warrior/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "warrior")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/warrior"))
        .join("logs")
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

fn read_env_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ReplayConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ReplayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn default_log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }

    #[test]
    fn empty_environment_has_no_limits() {
        assert_eq!(config(&[]), ReplayConfig::default());
    }

    #[test]
    fn max_turns_is_read_and_clamped() {
        assert_eq!(config(&[("WARRIOR_MAX_TURNS", "5")]).max_turns, Some(5));
        assert_eq!(config(&[("WARRIOR_MAX_TURNS", "0")]).max_turns, Some(1));
        assert_eq!(config(&[("WARRIOR_MAX_TURNS", "many")]).max_turns, None);
        assert_eq!(config(&[("WARRIOR_MAX_TURNS", "-3")]).max_turns, None);
    }

    #[test]
    fn log_dir_is_taken_verbatim() {
        let config = config(&[("WARRIOR_LOG_DIR", "/var/log/warrior")]);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/warrior")));
    }

    #[test]
    fn empty_log_dir_means_no_file_logging() {
        assert_eq!(config(&[("WARRIOR_LOG_DIR", "")]).log_dir, None);
    }

    #[test]
    fn log_file_flag_falls_back_to_cache_dir() {
        let config = config(&[("WARRIOR_LOG_FILE", "true")]);
        assert_eq!(config.log_dir, Some(default_log_dir()));
    }

    #[test]
    fn explicit_log_dir_wins_over_log_file_flag() {
        let config = config(&[
            ("WARRIOR_LOG_DIR", "/srv/logs"),
            ("WARRIOR_LOG_FILE", "1"),
        ]);
        assert_eq!(config.log_dir, Some(PathBuf::from("/srv/logs")));
    }

    #[test]
    fn log_file_flag_spellings() {
        for on in ["true", "1", "yes", "on", "TRUE", "On"] {
            assert_eq!(
                config(&[("WARRIOR_LOG_FILE", on)]).log_dir,
                Some(default_log_dir()),
                "{on}"
            );
        }
        for off in ["false", "0", "no", "off", "maybe", ""] {
            assert_eq!(config(&[("WARRIOR_LOG_FILE", off)]).log_dir, None, "{off}");
        }
    }
}
