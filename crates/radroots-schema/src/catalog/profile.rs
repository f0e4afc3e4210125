use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{Cursor, Shape, Text, Validated};

/// A public profile. Every field other than `name` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nip05: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lud06: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lud16: Option<String>,
    /// Bot marker, carried as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
}

impl Shape for Profile {
    const NAME: &'static str = "profile";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Profile {
            name: required(Text),
            display_name: optional(Text),
            nip05: optional(Text),
            about: optional(Text),
            website: optional(Text),
            picture: optional(Text),
            banner: optional(Text),
            lud06: optional(Text),
            lud16: optional(Text),
            bot: optional(Text),
        })
    }
}
