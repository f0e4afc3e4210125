//! # Record Kinds: Single Source of Truth
//!
//! [`RecordKind`] names every record shape in the catalog and [`Record`]
//! holds one normalized record of any kind. Both enums are closed: adding a
//! kind forces every `match` over them, including the dispatch table in
//! [`crate::catalog`], to handle it at compile time.
//!
//! | Selector       | Record            | Event kind |
//! |----------------|-------------------|------------|
//! | `listing`      | [`Listing`]       | 30402      |
//! | `profile`      | [`Profile`]       | 0          |
//! | `comment`      | [`Comment`]       | 1111       |
//! | `reaction`     | [`Reaction`]      | 7          |
//! | `message`      | [`Message`]       | 14         |
//! | `follow`       | [`Follow`]        | 3          |
//! | `list`         | [`List`]          | none       |
//! | `list_set`     | [`ListSet`]       | none       |
//! | `farm`         | [`Farm`]          | none       |
//! | `plot`         | [`Plot`]          | none       |
//! | `gcs_location` | [`GcsLocation`]   | none       |
//! | `farm_ref`     | [`FarmRef`]       | none       |
//! | `post`         | [`Post`]          | 1          |
//! | `app_data`     | [`AppData`]       | 30078      |

use std::str::FromStr;

use radroots_core::{CanonicalizationError, ValidationError, WirePayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{
    AppData, Comment, Farm, FarmRef, Follow, GcsLocation, List, ListSet, Listing, Message, Plot,
    Post, Profile, Reaction,
};

/// Selector naming one record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Listing,
    Profile,
    Comment,
    Reaction,
    Message,
    Follow,
    List,
    ListSet,
    Farm,
    Plot,
    GcsLocation,
    FarmRef,
    Post,
    AppData,
}

impl RecordKind {
    /// Every kind, in catalog order.
    pub const ALL: [RecordKind; 14] = [
        Self::Listing,
        Self::Profile,
        Self::Comment,
        Self::Reaction,
        Self::Message,
        Self::Follow,
        Self::List,
        Self::ListSet,
        Self::Farm,
        Self::Plot,
        Self::GcsLocation,
        Self::FarmRef,
        Self::Post,
        Self::AppData,
    ];

    /// The snake_case selector. Matches the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Profile => "profile",
            Self::Comment => "comment",
            Self::Reaction => "reaction",
            Self::Message => "message",
            Self::Follow => "follow",
            Self::List => "list",
            Self::ListSet => "list_set",
            Self::Farm => "farm",
            Self::Plot => "plot",
            Self::GcsLocation => "gcs_location",
            Self::FarmRef => "farm_ref",
            Self::Post => "post",
            Self::AppData => "app_data",
        }
    }

    /// Default relay event kind carrying records of this kind, if one is
    /// assigned.
    ///
    /// Embedded shapes (`farm_ref`, `gcs_location`) and kinds published
    /// under application-chosen numbers return `None`.
    pub fn event_kind(&self) -> Option<u32> {
        match self {
            Self::Profile => Some(0),
            Self::Post => Some(1),
            Self::Follow => Some(3),
            Self::Reaction => Some(7),
            Self::Message => Some(14),
            Self::Comment => Some(1111),
            Self::AppData => Some(30078),
            Self::Listing => Some(30402),
            Self::List
            | Self::ListSet
            | Self::Farm
            | Self::Plot
            | Self::GcsLocation
            | Self::FarmRef => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ValidationError;

    /// Parse a selector. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listing" => Ok(Self::Listing),
            "profile" => Ok(Self::Profile),
            "comment" => Ok(Self::Comment),
            "reaction" => Ok(Self::Reaction),
            "message" => Ok(Self::Message),
            "follow" => Ok(Self::Follow),
            "list" => Ok(Self::List),
            "list_set" => Ok(Self::ListSet),
            "farm" => Ok(Self::Farm),
            "plot" => Ok(Self::Plot),
            "gcs_location" => Ok(Self::GcsLocation),
            "farm_ref" => Ok(Self::FarmRef),
            "post" => Ok(Self::Post),
            "app_data" => Ok(Self::AppData),
            other => Err(ValidationError::UnknownRecordKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// One validated, normalized record.
///
/// Serializes untagged: the output is the bare payload object, ready to be
/// embedded as event content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Listing(Listing),
    Profile(Profile),
    Comment(Comment),
    Reaction(Reaction),
    Message(Message),
    Follow(Follow),
    List(List),
    ListSet(ListSet),
    Farm(Farm),
    Plot(Plot),
    GcsLocation(GcsLocation),
    FarmRef(FarmRef),
    Post(Post),
    AppData(AppData),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Listing(_) => RecordKind::Listing,
            Self::Profile(_) => RecordKind::Profile,
            Self::Comment(_) => RecordKind::Comment,
            Self::Reaction(_) => RecordKind::Reaction,
            Self::Message(_) => RecordKind::Message,
            Self::Follow(_) => RecordKind::Follow,
            Self::List(_) => RecordKind::List,
            Self::ListSet(_) => RecordKind::ListSet,
            Self::Farm(_) => RecordKind::Farm,
            Self::Plot(_) => RecordKind::Plot,
            Self::GcsLocation(_) => RecordKind::GcsLocation,
            Self::FarmRef(_) => RecordKind::FarmRef,
            Self::Post(_) => RecordKind::Post,
            Self::AppData(_) => RecordKind::AppData,
        }
    }

    /// Compact wire text for this record.
    ///
    /// Declared fields only, in declaration order, with absent optionals
    /// omitted. Equal records always produce equal text.
    pub fn to_payload(&self) -> Result<WirePayload, CanonicalizationError> {
        WirePayload::new(self)
    }

    /// The record as an untyped JSON value.
    pub fn to_value(&self) -> Result<Value, CanonicalizationError> {
        Ok(serde_json::to_value(self)?)
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Record {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }
        )+
    };
}

impl_from_record!(
    Listing,
    Profile,
    Comment,
    Reaction,
    Message,
    Follow,
    List,
    ListSet,
    Farm,
    Plot,
    GcsLocation,
    FarmRef,
    Post,
    AppData,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_kinds_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in RecordKind::ALL {
            assert!(seen.insert(kind), "Duplicate kind: {kind}");
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for kind in RecordKind::ALL {
            let parsed: RecordKind = kind
                .as_str()
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {kind}: {e}"));
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for kind in RecordKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "zap".parse::<RecordKind>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownRecordKind { ref kind } if kind == "zap"));
        assert!("Listing".parse::<RecordKind>().is_err());
        assert!("".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_event_kinds() {
        assert_eq!(RecordKind::Profile.event_kind(), Some(0));
        assert_eq!(RecordKind::Listing.event_kind(), Some(30402));
        assert_eq!(RecordKind::Comment.event_kind(), Some(1111));
        assert_eq!(RecordKind::FarmRef.event_kind(), None);
    }

    #[test]
    fn test_record_serializes_untagged() {
        let record = Record::from(FarmRef {
            pubkey: "abc".to_string(),
            d_tag: "f1".to_string(),
        });
        assert_eq!(record.kind(), RecordKind::FarmRef);
        assert_eq!(
            record.to_payload().unwrap().as_str(),
            r#"{"pubkey":"abc","d_tag":"f1"}"#
        );
        assert_eq!(
            record.to_value().unwrap(),
            json!({"pubkey": "abc", "d_tag": "f1"})
        );
    }
}
