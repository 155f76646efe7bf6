pub mod error;

use std::path::{Path, PathBuf};

use profilekit_model::Route;
use url::Url;

use crate::constants::{ENV_HOME_ROUTE, ENV_STORAGE_BASE_URL};
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    ConfigMetadata, EditorConfig, NavigationConfig, StorageConfig,
};
use crate::util::normalize_base_url;

use error::ConfigLoadError;

/// Effective configuration plus a record of where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: EditorConfig,
    pub metadata: ConfigMetadata,
}

/// Builder for resolving [`EditorConfig`].
///
/// Precedence: environment > TOML file > defaults. The TOML path is taken
/// from [`ConfigLoader::with_config_path`] or `PROFILEKIT_CONFIG`.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env: Option<EnvConfig>,
    load_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env: None,
            load_dotenv: true,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Use the given environment snapshot instead of reading the process
    /// environment. Implies [`ConfigLoader::skip_dotenv`].
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self.load_dotenv = false;
        self
    }

    pub fn skip_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let mut metadata = ConfigMetadata::default();

        if self.load_dotenv {
            metadata.env_file_loaded = match dotenvy::dotenv() {
                Ok(_) => true,
                Err(err) if err.not_found() => false,
                Err(source) => return Err(ConfigLoadError::DotEnv { source }),
            };
        }

        let env = self.env.clone().unwrap_or_else(EnvConfig::gather);

        let path = self.config_path.clone().or_else(|| env.config_path.clone());
        let file = match path.as_deref() {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };
        metadata.config_path = path;

        let storage = match env.storage_base_url.as_deref() {
            Some(raw) => {
                metadata.env_overrides.push(ENV_STORAGE_BASE_URL);
                StorageConfig::new(parse_storage_url(raw)?)
            }
            None => match file.storage.public_base_url.as_deref() {
                Some(raw) => StorageConfig::new(parse_storage_url(raw)?),
                None => StorageConfig::default(),
            },
        };

        let navigation = match env.home_route.as_deref() {
            Some(raw) => {
                metadata.env_overrides.push(ENV_HOME_ROUTE);
                NavigationConfig {
                    home_route: parse_home_route(raw)?,
                }
            }
            None => match file.navigation.home_route.as_deref() {
                Some(raw) => NavigationConfig {
                    home_route: parse_home_route(raw)?,
                },
                None => NavigationConfig::default(),
            },
        };

        let config = EditorConfig {
            storage,
            navigation,
        };

        tracing::debug!(
            storage_base_url = %config.storage.public_base_url,
            home_route = %config.navigation.home_route,
            config_path = ?metadata.config_path,
            env_overrides = ?metadata.env_overrides,
            "resolved editor configuration"
        );

        Ok(ConfigLoad { config, metadata })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_storage_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = normalize_base_url(raw).map_err(|source| {
        ConfigLoadError::InvalidStorageUrl {
            value: raw.to_string(),
            source,
        }
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigLoadError::UnsupportedStorageScheme {
            value: raw.to_string(),
        });
    }
    Ok(url)
}

fn parse_home_route(raw: &str) -> Result<Route, ConfigLoadError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigLoadError::InvalidHomeRoute {
            value: raw.to_string(),
        });
    }
    Ok(Route::new(trimmed))
}
