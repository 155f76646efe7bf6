use profilekit_model::Session;
use std::fmt::Debug;
use tokio::sync::watch;

/// Source of the current authenticated session.
///
/// The session may appear, disappear or be refreshed over the lifetime of the
/// editor; `subscribe` lets the host forward those changes.
pub trait SessionProvider: Send + Sync + Debug {
    /// Session as of now, `None` when signed out
    fn current(&self) -> Option<Session>;

    /// Receiver that observes every later change
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// [`SessionProvider`] backed by a `tokio::sync::watch` channel
#[derive(Debug)]
pub struct SessionWatch {
    sender: watch::Sender<Option<Session>>,
}

impl Default for SessionWatch {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SessionWatch {
    /// Create a provider holding `initial`
    pub fn new(initial: Option<Session>) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// Replace the current session and notify subscribers
    pub fn set(&self, session: Option<Session>) {
        self.sender.send_replace(session);
    }
}

impl SessionProvider for SessionWatch {
    fn current(&self) -> Option<Session> {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.sender.subscribe()
    }
}
