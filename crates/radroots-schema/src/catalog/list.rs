//! Generic tagged lists and named list sets.

use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{shape, ArrayOf, Cursor, Shape, Text, Validated};

/// One entry: a tag name and its string values, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub tag: String,
    pub values: Vec<String>,
}

impl Shape for ListEntry {
    const NAME: &'static str = "list_entry";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListEntry {
            tag: required(Text),
            values: required(ArrayOf(Text)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub content: String,
    pub entries: Vec<ListEntry>,
}

impl Shape for List {
    const NAME: &'static str = "list";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => List {
            content: required(Text),
            entries: required(ArrayOf(shape::<ListEntry>())),
        })
    }
}

/// A list addressed by `d_tag`, with optional presentation fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSet {
    pub d_tag: String,
    pub content: String,
    pub entries: Vec<ListEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Shape for ListSet {
    const NAME: &'static str = "list_set";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListSet {
            d_tag: required(Text),
            content: required(Text),
            entries: required(ArrayOf(shape::<ListEntry>())),
            title: optional(Text),
            description: optional(Text),
            image: optional(Text),
        })
    }
}
