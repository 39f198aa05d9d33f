use anyhow::{bail, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

/// Site-wide settings. Read once at startup; the site never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Forces the initial color scheme instead of asking the environment.
    pub prefers_dark: Option<bool>,
    pub log_level: String,
    /// Seed the feed and trackers with the demo entries shown on first load.
    pub seed_demo_content: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            prefers_dark: None,
            log_level: "info".into(),
            seed_demo_content: true,
        }
    }
}

impl SiteSettings {
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}; using info", self.log_level);
            LevelFilter::Info
        })
    }
}

pub struct SettingsStore {
    path: Option<PathBuf>,
    data: RwLock<SiteSettings>,
}

impl SettingsStore {
    /// Loads settings from `path` when it exists. A malformed file falls back to
    /// defaults rather than failing startup.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let data = match &path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings from {}", path.display()))?;
                serde_json::from_str(&contents).unwrap_or_else(|err| {
                    warn!(
                        "Ignoring malformed settings in {}: {}",
                        path.display(),
                        err
                    );
                    SiteSettings::default()
                })
            }
            _ => SiteSettings::default(),
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn from_settings(settings: SiteSettings) -> Self {
        Self {
            path: None,
            data: RwLock::new(settings),
        }
    }

    pub fn settings(&self) -> SiteSettings {
        match self.data.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn reload(&self) -> Result<()> {
        let Some(path) = &self.path else {
            bail!("Settings were not loaded from a file");
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let data: SiteSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        let mut guard = self
            .data
            .write()
            .map_err(|e| anyhow::anyhow!("settings lock poisoned: {e}"))?;
        *guard = data;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("settings.json");
        fs::write(&path, contents).expect("Failed to write settings");
        path
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = SettingsStore::new(Some(dir.path().join("absent.json"))).unwrap();
        assert_eq!(store.settings(), SiteSettings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_settings(&dir, r#"{ "prefersDark": true }"#);
        let settings = SettingsStore::new(Some(path)).unwrap().settings();
        assert_eq!(settings.prefers_dark, Some(true));
        assert_eq!(settings.log_level, "info");
        assert!(settings.seed_demo_content);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_settings(&dir, "not json");
        let store = SettingsStore::new(Some(path)).unwrap();
        assert_eq!(store.settings(), SiteSettings::default());
    }

    #[test]
    fn reload_picks_up_changes() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_settings(&dir, r#"{ "logLevel": "debug" }"#);
        let store = SettingsStore::new(Some(path)).unwrap();
        assert_eq!(store.settings().level_filter(), LevelFilter::Debug);

        write_settings(&dir, r#"{ "logLevel": "warn", "seedDemoContent": false }"#);
        store.reload().unwrap();
        assert_eq!(store.settings().level_filter(), LevelFilter::Warn);
        assert!(!store.settings().seed_demo_content);
    }

    #[test]
    fn reload_without_file_is_an_error() {
        let store = SettingsStore::from_settings(SiteSettings::default());
        assert!(store.reload().is_err());
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        let settings = SiteSettings {
            log_level: "chatty".into(),
            ..SiteSettings::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }
}
