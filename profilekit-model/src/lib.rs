//! Core data model definitions shared across profilekit crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod image;
pub mod profile;
pub mod route;
pub mod session;

pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use image::{AvatarRef, ImageFile, UploadedObject};
pub use profile::{ProfileRecord, ProfileUpdate};
pub use route::Route;
pub use session::Session;
