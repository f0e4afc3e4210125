use radroots_core::Number;
use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{shape, ArrayOf, Cursor, Numeric, Shape, Text, Validated};

/// One followed profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowProfile {
    /// Seconds since the Unix epoch.
    pub published_at: Number,
    pub public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
}

impl Shape for FollowProfile {
    const NAME: &'static str = "follow_profile";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => FollowProfile {
            published_at: required(Numeric),
            public_key: required(Text),
            relay_url: optional(Text),
            contact_name: optional(Text),
        })
    }
}

/// A follow list. An empty list is valid and means "follows nobody".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Follow {
    pub list: Vec<FollowProfile>,
}

impl Shape for Follow {
    const NAME: &'static str = "follow";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Follow {
            list: required(ArrayOf(shape::<FollowProfile>())),
        })
    }
}
