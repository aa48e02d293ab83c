//! Configuration loading (`autostacker.toml`)

pub mod consts;
mod model;

pub use model::{Config, InterpolationConfig, PreprocessConfig};

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::interpolation::InterpolationOptions;
use crate::preprocess::PreprocessOptions;

impl Config {
    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a file
    ///
    /// A relative `base_dir` is resolved against the directory of `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigParseError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::parse(&content)?;

        if let (Some(base_dir), Some(config_dir)) =
            (config.interpolation.base_dir.as_mut(), path.parent())
        {
            if base_dir.is_relative() {
                *base_dir = config_dir.join(&*base_dir);
            }
        }
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else `./autostacker.toml` if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let local = Path::new(consts::CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    pub fn interpolation_options(&self) -> InterpolationOptions {
        InterpolationOptions {
            base_dir: self.interpolation.base_dir.clone(),
            include_limit: self.interpolation.include_limit,
        }
    }

    pub fn preprocess_options(&self) -> PreprocessOptions {
        PreprocessOptions {
            interpolation: self.interpolation_options(),
            tags_as_list: self.preprocess.tags_as_list,
            user_data_base64: self.preprocess.user_data_base64,
        }
    }
}
