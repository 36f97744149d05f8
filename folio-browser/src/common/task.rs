//! Deferred side effects returned from domain updates
//!
//! A [`Task`] is a bundle of futures, each resolving to the next message for
//! the domain that produced it. Updates never await anything themselves; they
//! hand their suspension points back to the runtime as tasks.

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use std::fmt;
use std::future::Future;

pub struct Task<M> {
    futures: Vec<BoxFuture<'static, M>>,
}

impl<M: Send + 'static> Task<M> {
    /// A task that does nothing
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    /// A task that immediately yields `message`
    pub fn done(message: M) -> Self {
        Self {
            futures: vec![future::ready(message).boxed()],
        }
    }

    /// Run `future` and map its output into a message
    pub fn perform<T, F>(
        future: F,
        map: impl FnOnce(T) -> M + Send + 'static,
    ) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            futures: vec![future.map(map).boxed()],
        }
    }

    /// Combine several tasks into one
    pub fn batch(tasks: impl IntoIterator<Item = Task<M>>) -> Self {
        Self {
            futures: tasks
                .into_iter()
                .flat_map(|task| task.futures)
                .collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.futures.is_empty()
    }

    /// Number of futures carried by this task
    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_none()
    }

    pub fn into_futures(self) -> Vec<BoxFuture<'static, M>> {
        self.futures
    }
}

impl<M> fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("futures", &self.futures.len())
            .finish()
    }
}
