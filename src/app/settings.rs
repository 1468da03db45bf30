use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "zcalc";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeSettings,
}

/// All fields optional; see [`super::theme::parse_color`] for accepted forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub border: Option<String>,
    pub display: Option<String>,
    pub error: Option<String>,
    pub indicator: Option<String>,
    pub digit: Option<String>,
    pub operator: Option<String>,
    pub operator_active: Option<String>,
    pub equals: Option<String>,
    pub clear: Option<String>,
    pub help: Option<String>,
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn ensure_settings_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&get_settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[allow(unreachable_code)]
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_parseable_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_DIR).join(SETTINGS_FILE);
        ensure_settings_file_at(&path).unwrap();
        assert!(path.exists());

        let settings = load_settings_from(&path).unwrap();
        assert!(settings.theme.error.is_none());

        // A second call leaves the existing file alone.
        std::fs::write(&path, r#"{"theme":{"error":"red"}}"#).unwrap();
        ensure_settings_file_at(&path).unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.theme.error.as_deref(), Some("red"));
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"theme":{"operator":"blue"},"future":1}"#).unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.theme.operator.as_deref(), Some("blue"));
        assert!(settings.theme.display.is_none());
    }

    #[test]
    fn malformed_json_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(load_settings_from(&path).is_none());
        assert!(load_settings_from(&dir.path().join("absent.json")).is_none());
    }
}
