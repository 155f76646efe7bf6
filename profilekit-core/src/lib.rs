//! Core library for profilekit.
//!
//! Holds the profile domain (validated value objects and draft validation),
//! the ports the editor talks to (profile store, image store, navigator,
//! session provider) and in-memory adapters for those ports.

/// Store error type shared by every port
pub mod error;
/// Profile domain, ports and adapters
pub mod profile;

pub use error::{StoreError, StoreResult};
pub use profile::*;

pub use profilekit_model as model;
