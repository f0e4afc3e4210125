//! Direct messages.
//!
//! A message must name at least one recipient. The recipient list keeps its
//! order; duplicates are not collapsed.

use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{shape, Cursor, NonEmpty, Shape, Text, Validated};

/// Pointer to another event, optionally with a relay hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPtr {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relays: Option<String>,
}

impl Shape for EventPtr {
    const NAME: &'static str = "event_ptr";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => EventPtr {
            id: required(Text),
            relays: optional(Text),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecipient {
    pub public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay_url: Option<String>,
}

impl Shape for MessageRecipient {
    const NAME: &'static str = "message_recipient";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => MessageRecipient {
            public_key: required(Text),
            relay_url: optional(Text),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub recipients: Vec<MessageRecipient>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EventPtr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Shape for Message {
    const NAME: &'static str = "message";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Message {
            recipients: required(NonEmpty(shape::<MessageRecipient>())),
            content: required(Text),
            reply_to: optional(shape::<EventPtr>()),
            subject: optional(Text),
        })
    }
}
