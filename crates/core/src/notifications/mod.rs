//! Notifications module - event types and the dispatch seam.

mod notifications_model;
mod sink;

pub use notifications_model::NotificationEvent;
pub use sink::{MockNotificationSink, NoOpNotificationSink, NotificationSink};
