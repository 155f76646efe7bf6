//! Editor driver
//!
//! Owns the state and services and runs each message's task chain to
//! completion on the caller's task, so results are applied strictly in order.

use profilekit_core::SessionProvider;
use profilekit_model::Session;
use tokio::sync::watch;

use crate::messages::ProfileMessage;
use crate::services::EditorServices;
use crate::state::ProfileEditState;
use crate::task::Task;
use crate::update::update_profile_edit;
use crate::view::ProfileFormView;

#[derive(Debug)]
pub struct ProfileEditor {
    state: ProfileEditState,
    services: EditorServices,
}

impl ProfileEditor {
    pub fn new(services: EditorServices) -> Self {
        Self {
            state: ProfileEditState::default(),
            services,
        }
    }

    pub fn state(&self) -> &ProfileEditState {
        &self.state
    }

    pub fn services(&self) -> &EditorServices {
        &self.services
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Apply one message and return its follow-up work without running it.
    ///
    /// Hosts with their own executor resolve the task and feed the result
    /// back here.
    pub fn update(&mut self, message: ProfileMessage) -> Task<ProfileMessage> {
        update_profile_edit(&mut self.state, &self.services, message)
    }

    /// Apply a message and every message its tasks produce, until idle
    pub async fn dispatch(&mut self, message: ProfileMessage) {
        let mut next = Some(message);
        while let Some(message) = next {
            next = self.update(message).resolve().await;
        }
    }

    pub fn view(&self) -> Option<ProfileFormView> {
        ProfileFormView::from_state(&self.state)
    }

    /// Feed the provider's current session through the identity gate
    pub async fn sync_session(&mut self, provider: &dyn SessionProvider) {
        self.dispatch(ProfileMessage::SessionChanged(provider.current()))
            .await;
    }

    /// Follow session changes until the provider's sender is dropped
    pub async fn follow_sessions(
        &mut self,
        mut sessions: watch::Receiver<Option<Session>>,
    ) {
        let initial = sessions.borrow_and_update().clone();
        self.dispatch(ProfileMessage::SessionChanged(initial)).await;

        while sessions.changed().await.is_ok() {
            let session = sessions.borrow_and_update().clone();
            self.dispatch(ProfileMessage::SessionChanged(session)).await;
        }
        log::debug!("[ProfileEdit] Session provider closed");
    }

    /// Stop reacting to messages; results of work already started are
    /// dropped when they arrive.
    pub fn teardown(&mut self) {
        log::debug!("[ProfileEdit] Teardown");
        self.state.abandon_submit();
        self.state.torn_down = true;
    }
}
