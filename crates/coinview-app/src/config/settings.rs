//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use coinview_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "coinview";

/// Default config location: `<config_dir>/coinview/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a config file
///
/// A missing file or a file that fails to parse yields defaults; the failure
/// is logged, never fatal.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))
}

/// Create the config directory and a default config file if missing
///
/// Returns `true` when a new file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# coinview configuration

[api]
base_url = "https://api.coinpaprika.com/v1/"
quote_currency = "USD"   # Currency tickers are quoted in
timeout_secs = 10

[cache]
stale_secs = 30          # Reuse fetched data for this long (0 = always refetch)

[ui]
coins_limit = 100        # Coins shown in the list
chart_days = 21          # Days of history in the chart
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

/// Settings for startup: write the default file on first run, then load
///
/// A file that cannot be created is logged and defaults are used.
pub fn load_or_init_settings(config_path: &Path) -> Settings {
    if let Err(e) = init_config_file(config_path) {
        warn!("Could not create default config at {:?}: {}", config_path, e);
    }
    load_settings(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_path_shape() {
        let path = default_config_path();
        assert!(path.ends_with("coinview/config.toml"));
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[cache]
stale_secs = 0

[ui]
coins_limit = 25
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.cache.stale_secs, 0);
        assert_eq!(settings.ui.coins_limit, 25);
        assert_eq!(settings.ui.chart_days, 21);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_settings_reports_invalid() {
        let err = parse_settings("[ui]\ncoins_limit = \"many\"").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert!(!init_config_file(&path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed = parse_settings(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_load_or_init_writes_default_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("coinview").join("config.toml");

        let settings = load_or_init_settings(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_or_init_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nchart_days = 7\n").unwrap();

        let settings = load_or_init_settings(&path);
        assert_eq!(settings.ui.chart_days, 7);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[ui]\nchart_days = 7\n");
    }

    #[test]
    fn test_load_or_init_falls_back_when_dir_unwritable() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        // Parent is a file, so the directory cannot be created
        let settings = load_or_init_settings(&blocker.join("config.toml"));
        assert_eq!(settings, Settings::default());
    }
}
