use profilekit_model::Route;
use std::fmt::Debug;

/// Host router handle
pub trait Navigator: Send + Sync + Debug {
    /// Leave the editor for `route`
    fn go_to(&self, route: Route);
}
