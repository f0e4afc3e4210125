//! Farms, plots and the reference linking a plot to its farm.

use serde::Serialize;
use serde_json::Value;

use super::geo::GcsLocation;
use crate::engine::composite::decode_object;
use crate::engine::{shape, ArrayOf, Cursor, Shape, Text, Validated};

/// Address fields plus surveyed geometry. Shared by farms and plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub gcs: GcsLocation,
}

/// Plots carry the same location shape as farms.
pub type PlotLocation = FarmLocation;

impl Shape for FarmLocation {
    const NAME: &'static str = "farm_location";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => FarmLocation {
            primary: optional(Text),
            city: optional(Text),
            region: optional(Text),
            country: optional(Text),
            gcs: required(shape::<GcsLocation>()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Farm {
    pub d_tag: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<FarmLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Shape for Farm {
    const NAME: &'static str = "farm";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Farm {
            d_tag: required(Text),
            name: required(Text),
            about: optional(Text),
            website: optional(Text),
            picture: optional(Text),
            banner: optional(Text),
            location: optional(shape::<FarmLocation>()),
            tags: optional(ArrayOf(Text)),
        })
    }
}

/// Address of a farm record: its publisher key and `d_tag`.
///
/// Only the shape is checked. Whether the farm exists is not this crate's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FarmRef {
    pub pubkey: String,
    pub d_tag: String,
}

impl Shape for FarmRef {
    const NAME: &'static str = "farm_ref";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => FarmRef {
            pubkey: required(Text),
            d_tag: required(Text),
        })
    }
}

/// A plot of land belonging to a farm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plot {
    pub d_tag: String,
    pub farm: FarmRef,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PlotLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Shape for Plot {
    const NAME: &'static str = "plot";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Plot {
            d_tag: required(Text),
            farm: required(shape::<FarmRef>()),
            name: required(Text),
            about: optional(Text),
            location: optional(shape::<PlotLocation>()),
            tags: optional(ArrayOf(Text)),
        })
    }
}
