// In-memory adapters for the profile ports. Used by the demo binary and as
// recording collaborators in tests.

mod in_memory;

pub use in_memory::{
    InMemoryImageStore, InMemoryProfileStore, RecordingNavigator,
    UploadBehavior,
};
