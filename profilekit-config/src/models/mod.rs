pub mod sources;

use std::path::PathBuf;
use std::sync::LazyLock;

use profilekit_model::Route;
use url::Url;

use crate::constants::{DEFAULT_HOME_ROUTE, DEFAULT_STORAGE_BASE_URL};
use crate::util::normalize_base_url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfig {
    pub storage: StorageConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Public prefix of the avatar bucket, always ending with `/`
    pub public_base_url: Url,
}

static DEFAULT_PUBLIC_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    normalize_base_url(DEFAULT_STORAGE_BASE_URL)
        .expect("DEFAULT_STORAGE_BASE_URL must be an absolute URL")
});

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_base_url: DEFAULT_PUBLIC_BASE_URL.clone(),
        }
    }
}

impl StorageConfig {
    pub fn new(public_base_url: Url) -> Self {
        Self { public_base_url }
    }

    /// Fully qualified public URL for an uploaded object path.
    ///
    /// The path is appended to the base verbatim (leading slashes dropped),
    /// so `u123/avatar.png` becomes `<base>u123/avatar.png`.
    pub fn public_url(&self, object_path: &str) -> Result<Url, url::ParseError> {
        let path = object_path.trim_start_matches('/');
        Url::parse(&format!("{}{}", self.public_base_url, path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Where the editor sends the user after a save or a missing profile
    pub home_route: Route,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_route: Route::new(DEFAULT_HOME_ROUTE),
        }
    }
}

/// Where the effective values came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
    pub env_overrides: Vec<&'static str>,
}
