use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to load .env file: {source}")]
    DotEnv {
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid storage base URL `{value}`: {source}")]
    InvalidStorageUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("storage base URL `{value}` must use http or https")]
    UnsupportedStorageScheme { value: String },

    #[error("home route `{value}` must start with `/`")]
    InvalidHomeRoute { value: String },
}
