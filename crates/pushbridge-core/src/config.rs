use serde::{Deserialize, Serialize};

use pushbridge_model::TimeoutMs;

/// How long a task waits for the host application's response before giving
/// up, in milliseconds.
pub const DEFAULT_RESPONSE_TIMEOUT_MS: TimeoutMs = 3_000;

/// Tuning knobs for a [`ResponseTask`](crate::task::ResponseTask).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    /// Response deadline in milliseconds.
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: TimeoutMs,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT_MS,
        }
    }
}

fn default_response_timeout_ms() -> TimeoutMs {
    DEFAULT_RESPONSE_TIMEOUT_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deadline_is_three_seconds() {
        assert_eq!(TaskConfig::default().response_timeout_ms, 3_000);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: TaskConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.response_timeout_ms, DEFAULT_RESPONSE_TIMEOUT_MS);

        let config: TaskConfig = serde_json::from_str(r#"{"responseTimeoutMs":500}"#).unwrap();
        assert_eq!(config.response_timeout_ms, 500);
    }
}
