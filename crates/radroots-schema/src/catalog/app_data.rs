use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{Cursor, Shape, Text, Validated};

/// Application-specific data addressed by `d_tag`. `content` is not parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppData {
    pub d_tag: String,
    pub content: String,
}

impl Shape for AppData {
    const NAME: &'static str = "app_data";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => AppData {
            d_tag: required(Text),
            content: required(Text),
        })
    }
}
