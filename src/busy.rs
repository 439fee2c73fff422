//! Busy-state callbacks for submission lifecycle events.
//!
//! Inject an [`Arc<dyn BusyCallback>`] via
//! [`crate::config::ExtractionConfigBuilder::busy_callback`] to be told
//! when a submission claims and releases the pipeline. Hosts typically
//! disable their trigger control in `on_busy_start` and re-enable it in
//! `on_busy_end`, but the extraction logic knows nothing about any UI —
//! the callbacks are the whole coupling surface.
//!
//! `on_busy_end` fires on *every* terminal outcome, success or failure,
//! exactly once per accepted submission. A submission rejected with
//! [`Busy`](crate::error::ExtractError::Busy) fires neither callback:
//! it never claimed the pipeline.

use std::sync::Arc;

/// Called by the extractor as a submission claims and releases the
/// single in-flight slot.
///
/// Implementations must be `Send + Sync` (the extractor is shared
/// across tasks). Both methods have default no-op implementations so
/// callers only override what they care about.
pub trait BusyCallback: Send + Sync {
    /// Called after a submission has claimed the pipeline, before the
    /// analysis request is issued.
    fn on_busy_start(&self) {}

    /// Called when the submission reaches a terminal outcome, whatever
    /// that outcome is.
    fn on_busy_end(&self) {}
}

/// A no-op implementation for callers that don't need busy events.
///
/// This is the default when no callback is configured.
pub struct NoopBusyCallback;

impl BusyCallback for NoopBusyCallback {}

/// Convenience alias matching the type stored in
/// [`crate::config::ExtractionConfig`].
pub type SharedBusyCallback = Arc<dyn BusyCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        ends: AtomicUsize,
    }

    impl BusyCallback for TrackingCallback {
        fn on_busy_start(&self) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_busy_end(&self) {
            self.ends.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopBusyCallback;
        cb.on_busy_start();
        cb.on_busy_end();
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            ends: AtomicUsize::new(0),
        };

        tracker.on_busy_start();
        tracker.on_busy_end();

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.ends.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BusyCallback> = Arc::new(NoopBusyCallback);
        cb.on_busy_start();
        cb.on_busy_end();
    }
}
