//! Helpers for resolving [`Task`]s outside the runtime
//!
//! Tests that need to control completion order take the futures out of a
//! task and resolve them one by one; the rest use [`drain`].

use futures::future;

use crate::common::Task;

/// Resolve every future in `task`, keeping their order
pub async fn resolve_all<M: Send + 'static>(task: Task<M>) -> Vec<M> {
    future::join_all(task.into_futures()).await
}

/// Resolve a task expected to yield exactly one message
pub async fn drain<M: Send + 'static>(task: Task<M>) -> Option<M> {
    let mut messages = resolve_all(task).await;
    match messages.len() {
        1 => messages.pop(),
        0 => None,
        n => panic!("expected at most one message, task produced {n}"),
    }
}
