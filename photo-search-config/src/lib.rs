use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "photo-search";

/// Takes precedence over the key stored in the configuration file.
pub const API_KEY_ENV_VAR: &str = "FLICKR_API_KEY";

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const DEFAULT_ITEMS_PER_ROW: u32 = 3;

/// Flickr refuses larger pages.
const MAX_PER_PAGE: u32 = 500;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Confy(#[from] confy::ConfyError),
    #[error("No Flickr API key configured; set FLICKR_API_KEY or add api_key to {}", .0.display())]
    MissingApiKey(PathBuf),
    #[error("items_per_row must be at least 1")]
    InvalidItemsPerRow,
    #[error("per_page must be between 1 and 500, got {0}")]
    InvalidPerPage(u32),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub per_page: u32,
    pub items_per_row: u32,
    pub share_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            per_page: DEFAULT_PER_PAGE,
            items_per_row: DEFAULT_ITEMS_PER_ROW,
            share_dir: None,
        }
    }
}

impl Config {
    /// Load the configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, None)?;
        tracing::debug!("Loaded configuration from {:?}", Self::path().ok());
        Ok(config)
    }

    /// Save the configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// The API key from the environment, falling back to the stored one.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with_override(std::env::var(API_KEY_ENV_VAR).ok())
    }

    pub fn require_api_key(&self) -> Result<String, ConfigError> {
        match self.api_key() {
            Some(key) => Ok(key),
            None => Err(ConfigError::MissingApiKey(Self::path()?)),
        }
    }

    fn api_key_with_override(&self, env_key: Option<String>) -> Option<String> {
        env_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| Some(self.api_key.clone()).filter(|key| !key.trim().is_empty()))
    }

    /// Where shared photos are exported: the configured directory, else the
    /// user's pictures directory, else the system temp directory.
    pub fn share_dir(&self) -> PathBuf {
        self.share_dir
            .clone()
            .or_else(dirs::picture_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_NAME)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_row == 0 {
            return Err(ConfigError::InvalidItemsPerRow);
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(ConfigError::InvalidPerPage(self.per_page));
        }
        Ok(())
    }
}
