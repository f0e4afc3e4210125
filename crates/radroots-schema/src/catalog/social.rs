//! Short-form social records: posts, comments and reactions.
//!
//! `root` and `parent` reference other events. Their structure is owned by
//! the event envelope, so here they are opaque and only required to be
//! present.

use radroots_core::OpaqueValue;
use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{Cursor, Opaque, Shape, Text, Validated};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub content: String,
}

impl Shape for Post {
    const NAME: &'static str = "post";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Post {
            content: required(Text),
        })
    }
}

/// A threaded reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub root: OpaqueValue,
    pub parent: OpaqueValue,
    pub content: String,
}

impl Shape for Comment {
    const NAME: &'static str = "comment";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Comment {
            root: required(Opaque),
            parent: required(Opaque),
            content: required(Text),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reaction {
    pub root: OpaqueValue,
    /// Reaction text, e.g. `"+"` or an emoji.
    pub content: String,
}

impl Shape for Reaction {
    const NAME: &'static str = "reaction";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Reaction {
            root: required(Opaque),
            content: required(Text),
        })
    }
}
