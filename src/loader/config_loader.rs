//! Config discovery and loading

use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::merger::ConfigMerger;
use crate::error::ConfigError;
use crate::models::Config;

/// Project config file names, in order of preference
const CONFIG_FILE_NAMES: [&str; 2] = ["ldsheet.yml", ".ldsheet.yml"];

pub struct ConfigLoader {
    base_dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            explicit: None,
        }
    }

    /// Layer an explicit config file over the discovered project config
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Load every config file that applies and merge them over the defaults
    pub fn load(&self) -> Result<Config, ConfigError> {
        let files = self.config_files()?;
        if files.is_empty() {
            debug!("No config file found, using defaults");
            return Ok(Config::default());
        }

        let mut fragments = Vec::new();
        for path in files {
            let fragment = Self::read_fragment(&path)?;
            // An empty YAML file parses as null and contributes nothing
            if !fragment.is_null() {
                fragments.push((path, fragment));
            }
        }

        let merged = ConfigMerger::new().merge_configs(JsonValue::Null, fragments);
        let config = crate::defaults::merge_with_defaults(merged)?;
        info!("Loaded config (context: {})", config.context);
        Ok(config)
    }

    /// Config files to merge, lowest precedence first
    pub fn config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();

        if let Some(project) = self.find_project_config() {
            files.push(project);
        }

        if let Some(explicit) = &self.explicit {
            let path = if explicit.is_absolute() {
                explicit.clone()
            } else {
                self.base_dir.join(explicit)
            };

            if !path.is_file() {
                return Err(ConfigError::Missing(path));
            }
            if !files.contains(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    fn find_project_config(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.base_dir.join(name))
            .find(|path| path.is_file())
    }

    fn read_fragment(path: &Path) -> Result<JsonValue, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Reading config from {}", path.display());
        serde_yaml::from_str(&content)
            .map_err(|error| ConfigError::from_yaml_error(error, content, path))
    }
}
