//! Global context for CLI commands

use anyhow::{Context as _, Result};
use autostacker_core::Config;
use std::path::PathBuf;

/// Global context containing the loaded config
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Load the config named on the command line, `./autostacker.toml`, or defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config = Config::load_or_default(config_path.as_deref()).with_context(|| {
            match &config_path {
                Some(path) => format!("Failed to load config {}", path.display()),
                None => "Failed to load autostacker.toml".to_string(),
            }
        })?;

        Ok(Self { config, verbose })
    }
}
