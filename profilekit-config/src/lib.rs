//! Configuration library for profilekit.
//!
//! Resolves the editor configuration from built-in defaults, an optional TOML
//! file, a `.env` file and process environment variables, in that order of
//! increasing precedence.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{ConfigMetadata, EditorConfig, NavigationConfig, StorageConfig};
