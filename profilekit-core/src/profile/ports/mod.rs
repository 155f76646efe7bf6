//! Ports consumed by the profile editor.
//!
//! The editor never talks to a concrete backend; hosts inject implementations
//! of these traits (network clients in production, the in-memory adapters in
//! tests and the demo binary).

mod image_store;
mod navigator;
mod profile_store;
mod session;

pub use image_store::ImageStore;
pub use navigator::Navigator;
pub use profile_store::ProfileStore;
pub use session::{SessionProvider, SessionWatch};
