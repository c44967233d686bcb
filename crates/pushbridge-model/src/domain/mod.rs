mod behavior;
pub use behavior::NotificationBehavior;

mod message;
pub use message::{MessageNotification, RemoteMessage};

/// Timeout value in milliseconds.
///
/// Used wherever an explicit time limit is required (e.g. the response
/// deadline of a handler task).
pub type TimeoutMs = u64;
