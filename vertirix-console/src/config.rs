use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User id used when neither the CLI nor the config file names one
pub const DEFAULT_USER_ID: &str = "default";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ConsoleConfig {
    pub user: Option<UserConfig>,
    pub storage: Option<StorageConfig>,
    pub import: Option<ImportConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UserConfig {
    pub id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImportConfig {
    pub delimiter: Option<String>,
}

const DEFAULT_CONFIG: &str = r#"
[user]
id = "default"

[storage]
# Defaults to the platform data directory, e.g. ~/.local/share/vertirix/console.db
# path = "/path/to/console.db"

[import]
delimiter = ","
"#;

impl ConsoleConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Loads the config at `config_path`, writing the default file first if it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    pub fn user_id(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.id.as_str())
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(DEFAULT_USER_ID)
    }

    /// Delimiter byte for contact CSV files, `,` unless configured.
    pub fn delimiter(&self) -> Result<u8, ConfigError> {
        let Some(delimiter) = self.import.as_ref().and_then(|i| i.delimiter.as_deref()) else {
            return Ok(b',');
        };

        match delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ConfigError::Message(format!(
                "import.delimiter must be a single ASCII character, got {:?}",
                delimiter
            ))),
        }
    }

    pub fn db_path(&self) -> anyhow::Result<PathBuf> {
        match self.storage.as_ref().and_then(|s| s.path.as_ref()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => crate::helpers::database::get_db_path(),
        }
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("vertirix").join("console.toml")
    } else {
        PathBuf::from("console.toml")
    }
}
