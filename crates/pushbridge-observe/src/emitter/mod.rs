use serde_json::Value;
use tracing::debug;

use pushbridge_core::EventEmitter;

/// An [`EventEmitter`] that writes every emitted event to the tracing
/// subscriber instead of a host event bus.
///
/// Useful in development and demos, where no host runtime is attached.
pub struct TracingEmitter;

impl TracingEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter for TracingEmitter {
    fn emit(&self, event: &str, payload: Value) {
        debug!(event, payload = %payload, "event emitted to host application");
    }
}
