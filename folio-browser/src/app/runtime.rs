//! Single-threaded message loop for the catalog domain
//!
//! Each message is applied by one synchronous [`update`] call, so observers
//! never see a half-applied page. Suspension points (settle timers, provider
//! requests) live in the pending task set and feed their result messages back
//! through [`CatalogRuntime::dispatch`].

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use std::fmt;
use tokio::sync::mpsc;

use crate::domains::catalog::{
    CatalogDomain, CatalogMessage, CatalogState, update,
};

pub struct CatalogRuntime {
    domain: CatalogDomain,
    pending: FuturesUnordered<BoxFuture<'static, CatalogMessage>>,
    sender: mpsc::UnboundedSender<CatalogMessage>,
    inbox: mpsc::UnboundedReceiver<CatalogMessage>,
}

impl CatalogRuntime {
    pub fn new(domain: CatalogDomain) -> Self {
        let (sender, inbox) = mpsc::unbounded_channel();
        Self {
            domain,
            pending: FuturesUnordered::new(),
            sender,
            inbox,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.domain.state
    }

    pub fn domain(&self) -> &CatalogDomain {
        &self.domain
    }

    /// Handle for producers outside the loop, such as a scroll sentinel
    pub fn sender(&self) -> mpsc::UnboundedSender<CatalogMessage> {
        self.sender.clone()
    }

    /// Number of tasks still waiting on a timer or the provider
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply one message and schedule whatever it asks for
    pub fn dispatch(&mut self, message: CatalogMessage) {
        let task = update(&mut self.domain, message);
        self.pending.extend(task.into_futures());
    }

    /// Apply the next message, whichever comes first: one from the inbox or
    /// one from a finished pending task.
    ///
    /// Returns `false` without waiting when nothing was pending. The inbox
    /// alone never ends, so it is only raced against outstanding work.
    pub async fn step(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }

        let message = tokio::select! {
            Some(message) = self.inbox.recv() => message,
            Some(message) = self.pending.next() => message,
            else => return false,
        };
        self.dispatch(message);
        true
    }

    /// Run until the inbox is empty and no task is pending
    pub async fn run_until_idle(&mut self) {
        loop {
            self.drain_inbox();
            if self.pending.is_empty() {
                // Give external producers one turn to deliver before
                // declaring the loop idle.
                tokio::task::yield_now().await;
                self.drain_inbox();
                if self.pending.is_empty() {
                    log::trace!("[Runtime] Idle");
                    return;
                }
            }
            self.step().await;
        }
    }

    fn drain_inbox(&mut self) {
        while let Ok(message) = self.inbox.try_recv() {
            self.dispatch(message);
        }
    }
}

impl fmt::Debug for CatalogRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogRuntime")
            .field("domain", &self.domain)
            .field("pending", &self.pending.len())
            .finish()
    }
}
