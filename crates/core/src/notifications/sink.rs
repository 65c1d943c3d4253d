//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::NotificationEvent;

/// Trait for receiving notification events.
///
/// Implementations translate notification events into platform-specific
/// delivery (local push, in-app banner, etc.).
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect domain operations (best-effort)
pub trait NotificationSink: Send + Sync {
    /// Emit a single notification event.
    fn emit(&self, event: NotificationEvent);

    /// Emit multiple notification events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<NotificationEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't notify.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn emit(&self, _event: NotificationEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    events: Arc<Mutex<Vec<NotificationEvent>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl NotificationSink for MockNotificationSink {
    fn emit(&self, event: NotificationEvent) {
        self.events.lock().unwrap().push(event);
    }
}
