use serde::{Deserialize, Serialize};

/// How the host application wants an incoming notification to be presented.
///
/// The handling layer only ever asks one question of a behavior: whether
/// applying it would change anything observable (alert, sound, badge or
/// delivery priority). A behavior with no effect lets the notification pass
/// silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBehavior {
    /// Show a visible alert for the notification.
    #[serde(default)]
    pub should_show_alert: bool,
    /// Play the notification sound.
    #[serde(default)]
    pub should_play_sound: bool,
    /// Update the application badge.
    #[serde(default)]
    pub should_set_badge: bool,
    /// Override the delivery priority (e.g. `"high"`, `"min"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_override: Option<String>,
}

impl NotificationBehavior {
    /// Returns `true` if applying this behavior would have any observable
    /// effect on the notification's presentation.
    pub fn has_any_effect(&self) -> bool {
        self.should_show_alert
            || self.should_play_sound
            || self.should_set_badge
            || self.priority_override.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_behavior_has_no_effect() {
        assert!(!NotificationBehavior::default().has_any_effect());
    }

    #[test]
    fn each_flag_counts_as_an_effect() {
        let alert = NotificationBehavior {
            should_show_alert: true,
            ..Default::default()
        };
        let sound = NotificationBehavior {
            should_play_sound: true,
            ..Default::default()
        };
        let badge = NotificationBehavior {
            should_set_badge: true,
            ..Default::default()
        };
        let priority = NotificationBehavior {
            priority_override: Some("high".to_string()),
            ..Default::default()
        };

        assert!(alert.has_any_effect());
        assert!(sound.has_any_effect());
        assert!(badge.has_any_effect());
        assert!(priority.has_any_effect());
    }

    #[test]
    fn serde_camel_case_roundtrip() {
        let behavior = NotificationBehavior {
            should_show_alert: true,
            should_play_sound: false,
            should_set_badge: true,
            priority_override: Some("max".to_string()),
        };

        let json = serde_json::to_string(&behavior).unwrap();
        assert!(json.contains("\"shouldShowAlert\":true"));
        assert!(json.contains("\"priorityOverride\":\"max\""));

        let back: NotificationBehavior = serde_json::from_str(&json).unwrap();
        assert_eq!(back, behavior);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let behavior: NotificationBehavior = serde_json::from_str("{}").unwrap();
        assert_eq!(behavior, NotificationBehavior::default());
    }
}
