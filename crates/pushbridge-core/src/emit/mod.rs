use serde_json::Value;

/// Name of the event asking the host application for a behavior.
pub const HANDLE_NOTIFICATION_EVENT: &str = "onHandleNotification";
/// Name of the event emitted when the host application does not respond in
/// time.
pub const HANDLE_NOTIFICATION_TIMEOUT_EVENT: &str = "onHandleNotificationTimeout";

/// Delivery channel for named events sent to the host application layer.
///
/// Implemented by the host bridge; resolved from its registry and handed to
/// each task at construction. `emit` is fire-and-forget: delivery, batching
/// and ordering beyond the call itself are the bridge's concern.
pub trait EventEmitter: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}
