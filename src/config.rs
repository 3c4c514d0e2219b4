use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "students.json";
const DEFAULT_EXPORT_FILE: &str = "students_data.csv";

/// Configuration for roster, stored next to the data as `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// File name the roster payload is stored under.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Default file name for CSV export.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Value of a config key, if the key exists.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_file" => Some(self.data_file.clone()),
            "export_file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    /// Set a config key. The value is trimmed; empty values and unknown
    /// keys are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RosterError::Api(format!(
                "Config value for {} cannot be empty",
                key
            )));
        }
        match key {
            "data_file" => self.data_file = value.to_string(),
            "export_file" => self.export_file = value.to_string(),
            _ => return Err(RosterError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Keys `get`/`set` understand, for help and listing output.
    pub fn keys() -> &'static [&'static str] {
        &["data_file", "export_file"]
    }
}
