use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{ENV_CONFIG_PATH, ENV_HOME_ROUTE, ENV_STORAGE_BASE_URL};
use crate::util::non_empty_var;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub storage: FileStorageConfig,
    #[serde(default)]
    pub navigation: FileNavigationConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_base_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileNavigationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_route: Option<String>,
}

/// Values picked up from the process environment
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub storage_base_url: Option<String>,
    pub home_route: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(ENV_CONFIG_PATH).map(PathBuf::from),
            storage_base_url: non_empty_var(ENV_STORAGE_BASE_URL),
            home_route: non_empty_var(ENV_HOME_ROUTE),
        }
    }
}
