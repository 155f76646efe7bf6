//! Profile edit form.
//!
//! The editor is a message-driven state machine. Hosts feed it
//! [`ProfileMessage`]s (session changes, field edits, avatar picks, submit);
//! each update returns a [`Task`] whose output is the next message. The
//! [`ProfileEditor`] driver runs that loop to completion on the caller's task.
//!
//! - Identity gate: [`update::gate`]
//! - Form state manager: [`form`]
//! - Submit pipeline: [`update::submit`]

pub mod editor;
pub mod errors;
pub mod form;
pub mod messages;
pub mod services;
pub mod state;
pub mod task;
pub mod update;
pub mod view;

pub use editor::ProfileEditor;
pub use errors::ProfileEditError;
pub use form::{FieldValue, ProfileForm};
pub use messages::{LoadedProfile, ProfileMessage};
pub use services::EditorServices;
pub use state::{LoadState, PendingSubmit, ProfileEditState, SubmitPhase};
pub use task::Task;
pub use update::update_profile_edit;
pub use view::{AvatarPreview, ProfileFormView};
