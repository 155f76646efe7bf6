//! Deferred async work produced by an update.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::future::Future;

/// A unit of async work that resolves to at most one message.
///
/// Updates never await collaborators themselves; they hand back a `Task` and
/// the driver feeds its output into the next update. Dropping a task drops
/// the pending work with it.
#[must_use = "a Task does nothing unless it is resolved"]
pub struct Task<M> {
    future: Option<BoxFuture<'static, M>>,
}

impl<M> std::fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("pending", &self.future.is_some())
            .finish()
    }
}

impl<M: Send + 'static> Task<M> {
    /// A task that produces nothing
    pub fn none() -> Self {
        Self { future: None }
    }

    /// Run `future` and turn its output into a message with `map`
    pub fn perform<T, F>(
        future: F,
        map: impl FnOnce(T) -> M + Send + 'static,
    ) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            future: Some(future.map(map).boxed()),
        }
    }

    /// A task that immediately yields `message`
    pub fn done(message: M) -> Self {
        Self {
            future: Some(futures::future::ready(message).boxed()),
        }
    }

    pub fn is_none(&self) -> bool {
        self.future.is_none()
    }

    pub fn map<N: Send + 'static>(
        self,
        f: impl FnOnce(M) -> N + Send + 'static,
    ) -> Task<N> {
        Task {
            future: self.future.map(|future| future.map(f).boxed()),
        }
    }

    /// Await the task's message, `None` for an empty task
    pub async fn resolve(self) -> Option<M> {
        match self.future {
            Some(future) => Some(future.await),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn none_resolves_to_nothing() {
        let task: Task<u8> = Task::none();
        assert!(task.is_none());
        assert_eq!(task.resolve().await, None);
    }

    #[tokio::test]
    async fn perform_maps_output() {
        let task = Task::perform(async { 20 }, |value: i32| value + 1);
        assert_eq!(task.resolve().await, Some(21));
    }

    #[tokio::test]
    async fn map_chains() {
        let task = Task::done(2u32).map(|value| value.to_string());
        assert_eq!(task.resolve().await.as_deref(), Some("2"));
    }
}
