// Profile domain value objects
// Validated upon creation; the error Display strings are shown inline next to
// the offending form field.

mod avatar;
mod display_name;
mod handle;

pub use avatar::{AvatarError, validate_avatar};
pub use display_name::{DisplayName, DisplayNameError};
pub use handle::{Handle, HandleError};
