use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// An incoming remote (push) message as delivered by the platform transport.
///
/// Only the fields the bridge forwards to the host application are modeled;
/// the payload is otherwise opaque to the handling layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMessage {
    /// Transport-assigned message id, when the sender provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    /// Sender id (typically the upstream topic or sender address).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    /// When the message was sent, in unix milliseconds.
    #[serde(default)]
    pub sent_time: i64,
    /// Time-to-live in seconds.
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub original_priority: i32,
    /// Key/value payload attached by the sender.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    /// Display block, present for "notification messages".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<MessageNotification>,
}

/// The display block of a notification message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RemoteMessage {
    /// Serializes the message into the JSON object embedded in events sent
    /// to the host application.
    ///
    /// Every key is always present (absent values serialize as `null`), so
    /// the host side can destructure the object without existence checks.
    pub fn to_payload(&self) -> Value {
        json!({
            "messageId": self.message_id,
            "messageType": self.message_type,
            "from": self.from,
            "to": self.to,
            "collapseKey": self.collapse_key,
            "sentTime": self.sent_time,
            "ttl": self.ttl,
            "priority": self.priority,
            "originalPriority": self.original_priority,
            "data": self.data,
            "notification": self.notification.as_ref().map(|n| json!({
                "title": n.title,
                "body": n.body,
                "icon": n.icon,
                "color": n.color,
                "sound": n.sound,
                "tag": n.tag,
                "clickAction": n.click_action,
                "channelId": n.channel_id,
                "link": n.link,
            })),
        })
    }
}
