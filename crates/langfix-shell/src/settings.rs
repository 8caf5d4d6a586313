use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_ENV: &str = "LANGFIX_SETTINGS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub show_notice: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            show_notice: true,
        }
    }
}

/// `$LANGFIX_SETTINGS`, else `settings.json` beside the executable.
pub fn get_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV) {
        return Some(PathBuf::from(path));
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("settings.json")))
}

/// Missing file means defaults; an unreadable or malformed one is an error.
pub fn load_settings() -> Result<Settings> {
    match get_settings_path() {
        Some(path) if path.exists() => load_settings_from(&path),
        _ => Ok(Settings::default()),
    }
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("malformed settings {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("langfix-{}-{}.json", name, std::process::id()));
        fs::write(&p, content).unwrap();
        p
    }

    #[test]
    fn partial_file_fills_defaults() {
        let p = temp_file("partial", r#"{ "log_level": "debug" }"#);
        let s = load_settings_from(&p).unwrap();
        let _ = fs::remove_file(&p);
        assert_eq!(s.log_level, "debug");
        assert_eq!(s.log_file, None);
        assert!(s.show_notice);
    }

    #[test]
    fn full_file() {
        let p = temp_file(
            "full",
            r#"{ "log_level": "warn", "log_file": "language_fixer.log", "show_notice": false }"#,
        );
        let s = load_settings_from(&p).unwrap();
        let _ = fs::remove_file(&p);
        assert_eq!(
            s,
            Settings {
                log_level: "warn".to_string(),
                log_file: Some(PathBuf::from("language_fixer.log")),
                show_notice: false,
            }
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let p = temp_file("bad", "{ not json");
        let res = load_settings_from(&p);
        let _ = fs::remove_file(&p);
        assert!(res.unwrap_err().to_string().starts_with("malformed settings"));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let p = std::env::temp_dir().join("langfix-does-not-exist.json");
        assert!(load_settings_from(&p).is_err());
    }

    #[test]
    fn env_override_selects_settings_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let missing = std::env::temp_dir().join(format!(
            "langfix-missing-{}.json",
            std::process::id()
        ));
        std::env::set_var(SETTINGS_ENV, &missing);
        assert_eq!(get_settings_path(), Some(missing.clone()));
        assert_eq!(load_settings().unwrap(), Settings::default());

        let p = temp_file("env", r#"{ "show_notice": false }"#);
        std::env::set_var(SETTINGS_ENV, &p);
        let res = load_settings();
        std::env::remove_var(SETTINGS_ENV);
        let _ = fs::remove_file(&p);
        let s = res.unwrap();
        assert!(!s.show_notice);
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn default_path_sits_beside_executable() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        if std::env::var_os(SETTINGS_ENV).is_some() {
            return;
        }
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(get_settings_path(), Some(exe_dir.join("settings.json")));
    }
}
