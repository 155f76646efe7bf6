/// Editable draft and its validated form
pub mod draft;
/// Per-field error collection
pub mod validation;
/// Validated field types
pub mod value_objects;

pub use draft::{ProfileDraft, ProfileField, ValidatedProfile};
pub use validation::FieldErrors;
pub use value_objects::*;
