use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml_edit::DocumentMut;

use crate::panel::{PanelState, DEFAULT_ACTIVE_TAB};
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Panel defaults used when nothing has been saved
    pub panel: PanelConfig,
    /// Database file override (None = data directory default)
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub default_tab: String,
    pub default_open: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel: PanelConfig {
                default_tab: DEFAULT_ACTIVE_TAB.to_string(),
                default_open: false,
            },
            database_path: None,
        }
    }
}

/// TOML representation of panel configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPanelConfig {
    pub default_tab: Option<String>,
    pub default_open: Option<bool>,
}

/// TOML representation of storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub database: Option<PathBuf>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub panel: Option<TomlPanelConfig>,
    pub storage: Option<TomlStorageConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`. A missing or invalid file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let Ok(contents) = fs::read_to_string(path) else {
            return config;
        };

        let toml_config = match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => toml_config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring invalid config file"
                );
                return config;
            }
        };

        if let Some(panel) = toml_config.panel {
            if let Some(tab) = panel.default_tab.filter(|tab| !tab.is_empty()) {
                config.panel.default_tab = tab;
            }
            if let Some(open) = panel.default_open {
                config.panel.default_open = open;
            }
        }

        if let Some(storage) = toml_config.storage {
            config.database_path = storage.database;
        }

        config
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    /// Panel state to start from before saved preferences are applied
    pub fn default_panel_state(&self) -> PanelState {
        PanelState::default()
            .with_open(self.panel.default_open)
            .with_active_tab(self.panel.default_tab.clone())
    }
}

/// Save the default tab to the config file at `path`.
///
/// Updates `[panel] default_tab` and keeps the rest of the document,
/// comments included.
pub fn save_default_tab(path: &Path, tab: &str) -> std::io::Result<()> {
    let contents = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = contents
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let panel = doc
        .entry("panel")
        .or_insert(toml_edit::table())
        .as_table_like_mut()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "`panel` in config file is not a table",
            )
        })?;
    panel.insert("default_tab", toml_edit::value(tab));

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, doc.to_string())?;

    Ok(())
}
