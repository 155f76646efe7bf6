//! Profile Module
//!
//! Domain types and validation for profile editing, the ports the editor
//! depends on, and in-memory implementations of those ports.

/// Draft, value objects and validation
pub mod domain;
/// In-memory adapters
pub mod infrastructure;
/// Traits the editor depends on
pub mod ports;

pub use domain::*;
pub use infrastructure::{
    InMemoryImageStore, InMemoryProfileStore, RecordingNavigator,
    UploadBehavior,
};
pub use ports::{
    ImageStore, Navigator, ProfileStore, SessionProvider, SessionWatch,
};
