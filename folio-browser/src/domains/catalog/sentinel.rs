//! Viewport proximity observer
//!
//! Turns raw scroll positions into the catalog's single "near bottom"
//! signal. The sentinel does no debouncing of its own; the fetch
//! controller's gate and settle delay take care of bursts.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::messages::CatalogMessage;
use crate::infra::constants::scroll::NEAR_BOTTOM_THRESHOLD;

/// Scroll position snapshot, all values in the same unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Distance scrolled from the top of the document
    pub scroll_top: f32,
    /// Visible height
    pub viewport_height: f32,
    /// Total content height
    pub document_height: f32,
}

impl ViewportMetrics {
    /// Metrics for a viewport scrolled all the way down
    pub fn scrolled_to_end(document_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top: (document_height - viewport_height).max(0.0),
            viewport_height,
            document_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSentinel {
    threshold: f32,
}

impl Default for ScrollSentinel {
    fn default() -> Self {
        Self::new(NEAR_BOTTOM_THRESHOLD)
    }
}

impl ScrollSentinel {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// `scroll_top + viewport_height >= document_height - threshold`
    pub fn is_near_bottom(&self, metrics: &ViewportMetrics) -> bool {
        metrics.scroll_top + metrics.viewport_height
            >= metrics.document_height - self.threshold
    }

    /// Watch `positions` and send one [`CatalogMessage::ScrolledNearBottom`]
    /// into `sink` for every position near the bottom.
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// detaches the observer when dropped.
    pub fn attach(
        self,
        mut positions: mpsc::UnboundedReceiver<ViewportMetrics>,
        sink: mpsc::UnboundedSender<CatalogMessage>,
    ) -> SentinelHandle {
        let task = tokio::spawn(async move {
            while let Some(metrics) = positions.recv().await {
                if !self.is_near_bottom(&metrics) {
                    continue;
                }
                if sink.send(CatalogMessage::ScrolledNearBottom).is_err() {
                    log::debug!(
                        "[ScrollSentinel] Catalog inbox closed, stopping"
                    );
                    break;
                }
            }
        });

        SentinelHandle { task: Some(task) }
    }
}

/// Keeps an attached [`ScrollSentinel`] alive
#[derive(Debug)]
pub struct SentinelHandle {
    task: Option<JoinHandle<()>>,
}

impl SentinelHandle {
    /// Stop observing and wait for the forwarding task to wind down. No
    /// signal is sent after this resolves, on any runtime flavor.
    pub async fn detach(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancelled or already finished, either way it is gone
            let _ = task.await;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for SentinelHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f32) -> ViewportMetrics {
        ViewportMetrics {
            scroll_top,
            viewport_height: 600.0,
            document_height: 2000.0,
        }
    }

    #[test]
    fn fires_within_threshold_of_the_end() {
        let sentinel = ScrollSentinel::default();
        assert!(!sentinel.is_near_bottom(&metrics(1349.0)));
        assert!(sentinel.is_near_bottom(&metrics(1350.0)));
        assert!(sentinel.is_near_bottom(&metrics(1400.0)));
    }

    #[test]
    fn short_documents_are_always_near_bottom() {
        let sentinel = ScrollSentinel::default();
        let metrics = ViewportMetrics::scrolled_to_end(300.0, 600.0);
        assert_eq!(metrics.scroll_top, 0.0);
        assert!(sentinel.is_near_bottom(&metrics));
    }

    #[tokio::test]
    async fn forwards_only_near_bottom_positions() {
        let (positions_tx, positions_rx) = mpsc::unbounded_channel();
        let (sink_tx, mut sink_rx) = mpsc::unbounded_channel();
        let handle = ScrollSentinel::default().attach(positions_rx, sink_tx);

        positions_tx.send(metrics(0.0)).unwrap();
        positions_tx.send(metrics(1390.0)).unwrap();
        positions_tx.send(metrics(1395.0)).unwrap();
        drop(positions_tx);

        let mut received = Vec::new();
        while let Some(message) = sink_rx.recv().await {
            received.push(message.as_str());
        }
        assert_eq!(received, vec!["ScrolledNearBottom"; 2]);
        drop(handle);
    }

    #[tokio::test]
    async fn detach_stops_forwarding() {
        let (positions_tx, positions_rx) = mpsc::unbounded_channel();
        let (sink_tx, mut sink_rx) = mpsc::unbounded_channel();
        let handle = ScrollSentinel::default().attach(positions_rx, sink_tx);
        assert!(handle.is_attached());

        handle.detach().await;
        // Aborting drops the receiver and the sink sender with the task
        let _ = positions_tx.send(metrics(1400.0));
        assert!(sink_rx.recv().await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn detach_is_final_on_a_multi_thread_runtime() {
        let (positions_tx, positions_rx) = mpsc::unbounded_channel();
        let (sink_tx, mut sink_rx) = mpsc::unbounded_channel();
        let handle = ScrollSentinel::default().attach(positions_rx, sink_tx);

        for _ in 0..64 {
            let _ = positions_tx.send(metrics(1400.0));
        }
        handle.detach().await;

        // Whatever was forwarded before detach is already queued; the sink
        // sender is gone, so nothing can arrive after the backlog.
        let mut forwarded = 0;
        while sink_rx.try_recv().is_ok() {
            forwarded += 1;
        }
        assert!(forwarded <= 64);
        assert!(positions_tx.send(metrics(1400.0)).is_err());
        assert!(sink_rx.recv().await.is_none());
    }
}
