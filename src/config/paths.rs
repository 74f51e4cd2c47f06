//! Where Mailroom keeps its files
//!
//! `config.json` and `audit.log` share one directory. `MAILROOM_DATA_DIR`
//! names it outright; otherwise it is `mailroom` under the platform config
//! directory (`$XDG_CONFIG_HOME`, `~/.config`, or `%APPDATA%` on Windows).
//! Empty variables count as unset.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{MailroomError, MailroomResult};

const DATA_DIR_VAR: &str = "MAILROOM_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailroomPaths {
    base_dir: PathBuf,
}

impl MailroomPaths {
    /// Resolve the data directory from the process environment
    pub fn new() -> MailroomResult<Self> {
        Self::from_env(|key| std::env::var_os(key))
    }

    /// Resolve the data directory using `var` to look up environment variables
    pub fn from_env(var: impl Fn(&str) -> Option<OsString>) -> MailroomResult<Self> {
        let dir = |key: &str| var(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(base_dir) = dir(DATA_DIR_VAR) {
            return Ok(Self { base_dir });
        }

        let config_home = if cfg!(windows) {
            dir("APPDATA")
        } else {
            dir("XDG_CONFIG_HOME").or_else(|| dir("HOME").map(|home| home.join(".config")))
        };

        config_home
            .map(|home| Self {
                base_dir: home.join("mailroom"),
            })
            .ok_or_else(|| {
                MailroomError::Config(format!(
                    "no config directory found; set {} to choose one",
                    DATA_DIR_VAR
                ))
            })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Letters go to the system temp directory unless configured otherwise
    pub fn default_letters_dir() -> PathBuf {
        std::env::temp_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> MailroomResult<MailroomPaths> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        MailroomPaths::from_env(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_data_dir_var_wins() {
        let paths = resolve(&[
            ("MAILROOM_DATA_DIR", "/data/mailroom"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/pam"),
            ("APPDATA", "C:\\Users\\pam\\AppData"),
        ])
        .unwrap();

        assert_eq!(paths.base_dir(), Path::new("/data/mailroom"));
        assert_eq!(paths.settings_file(), Path::new("/data/mailroom/config.json"));
        assert_eq!(paths.audit_log(), Path::new("/data/mailroom/audit.log"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_xdg_then_home() {
        let xdg = resolve(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/pam")]).unwrap();
        assert_eq!(xdg.base_dir(), Path::new("/xdg/mailroom"));

        let home = resolve(&[("XDG_CONFIG_HOME", ""), ("HOME", "/home/pam")]).unwrap();
        assert_eq!(home.base_dir(), Path::new("/home/pam/.config/mailroom"));
    }

    #[test]
    fn test_empty_data_dir_var_is_ignored() {
        let paths = resolve(&[
            ("MAILROOM_DATA_DIR", ""),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/pam"),
            ("APPDATA", "/appdata"),
        ])
        .unwrap();
        assert_ne!(paths.base_dir(), Path::new(""));
        assert!(paths.base_dir().ends_with("mailroom"));
    }

    #[test]
    fn test_no_directory_is_config_error() {
        let err = resolve(&[]).unwrap_err();
        assert!(matches!(err, MailroomError::Config(_)));
        assert!(err.to_string().contains("MAILROOM_DATA_DIR"));
    }

    #[test]
    fn test_default_letters_dir_is_temp_dir() {
        assert_eq!(MailroomPaths::default_letters_dir(), std::env::temp_dir());
    }
}
