use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::consts::DEFAULT_INCLUDE_LIMIT;

/// autostacker.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterpolationConfig {
    /// Base directory for relative `file://` inclusions
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default = "default_include_limit")]
    pub include_limit: usize,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            include_limit: DEFAULT_INCLUDE_LIMIT,
        }
    }
}

fn default_include_limit() -> usize {
    DEFAULT_INCLUDE_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreprocessConfig {
    #[serde(default = "default_true")]
    pub tags_as_list: bool,
    #[serde(default = "default_true")]
    pub user_data_base64: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            tags_as_list: true,
            user_data_base64: true,
        }
    }
}

fn default_true() -> bool {
    true
}
