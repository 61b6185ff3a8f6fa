use crate::core::calculator::policy::{PairingPolicy, WeekMatch};
use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_db_path;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Keys every configuration file is expected to carry.
const KNOWN_KEYS: [&str; 4] = ["database", "week_match", "pairing", "hours_decimals"];

/// Upper bound for `hours_decimals`; larger values overflow the rounding factor.
pub const MAX_HOURS_DECIMALS: u32 = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub week_match: WeekMatch,
    #[serde(default)]
    pub pairing: PairingPolicy,
    #[serde(default = "default_hours_decimals")]
    pub hours_decimals: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_hours_decimals() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            week_match: WeekMatch::default(),
            pairing: PairingPolicy::default(),
            hours_decimals: default_hours_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("stechuhr")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".stechuhr")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stechuhr.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("stechuhr.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {}", e)))?;
        cfg.hours_decimals = cfg.hours_decimals.min(MAX_HOURS_DECIMALS);
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration and database files.
    /// Returns the configuration that was (or, in test mode, would have been) written.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_name {
            Some(name) => resolve_db_path(&name, &dir),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }

    /// Keys missing from a configuration file's YAML.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value = serde_yaml::from_str(content)?;
        let map = yaml.as_mapping();

        Ok(KNOWN_KEYS
            .iter()
            .filter(|k| {
                map.map(|m| !m.contains_key(**k))
                    .unwrap_or(true)
            })
            .copied()
            .collect())
    }

    /// Rewrite the config file with defaults filled in for missing keys.
    /// Returns the keys that were added.
    pub fn migrate_file() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let missing = Self::missing_keys(&content)?;
        if !missing.is_empty() {
            let cfg = Self::from_yaml(&content)?;
            fs::write(&path, cfg.to_yaml()?)?;
        }

        Ok(missing)
    }
}
