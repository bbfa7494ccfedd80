use crate::error::{EnergiaError, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Overrides the platform config directory when set.
pub const CONFIG_DIR_ENV: &str = "ENERGIA_CONFIG_DIR";

/// Display configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergiaConfig {
    /// strftime layout for table dates (pt-BR day/month/year by default)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Shade every other table row
    #[serde(default = "default_zebra")]
    pub zebra: bool,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_zebra() -> bool {
    true
}

impl Default for EnergiaConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            zebra: default_zebra(),
        }
    }
}

/// Keys accepted by `config <key> [value]`.
pub const CONFIG_KEYS: &[&str] = &["date-format", "zebra"];

impl EnergiaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: EnergiaConfig = serde_json::from_str(&content)?;
        validate_date_format(&config.date_format)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "date-format" => Ok(self.date_format.clone()),
            "zebra" => Ok(self.zebra.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "date-format" => self.set_date_format(value),
            "zebra" => {
                self.zebra = parse_bool(value)?;
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }

    pub fn set_date_format(&mut self, format: &str) -> Result<()> {
        validate_date_format(format)?;
        self.date_format = format.to_string();
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date-format", self.date_format.clone()),
            ("zebra", self.zebra.to_string()),
        ]
    }
}

/// Rejects layouts a bare date cannot be formatted with, including time and
/// timezone specifiers such as `%H` or `%z`.
fn validate_date_format(format: &str) -> Result<()> {
    let mut rendered = String::new();
    if format.is_empty() || write!(rendered, "{}", NaiveDate::MIN.format(format)).is_err() {
        return Err(EnergiaError::Config(format!(
            "Invalid date format: '{}'",
            format
        )));
    }
    Ok(())
}

fn unknown_key(key: &str) -> EnergiaError {
    EnergiaError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(EnergiaError::Config(format!(
            "Expected true or false, got '{}'",
            other
        ))),
    }
}

/// `$ENERGIA_CONFIG_DIR` if set, else the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("br.com", "energiatech", "energia")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| EnergiaError::Config("Could not determine config dir".to_string()))
}
