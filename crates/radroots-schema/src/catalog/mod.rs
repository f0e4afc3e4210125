//! # Record Catalog
//!
//! One module per record family. Every shape is declared exactly once as a
//! Rust struct plus a [`Shape`] impl listing its wire fields; composite
//! records reuse the nested shapes instead of redeclaring them.
//!
//! The catalog is plain static data. Nothing is registered at runtime, so
//! concurrent validation needs no locking.

pub mod app_data;
pub mod farm;
pub mod follow;
pub mod geo;
pub mod list;
pub mod listing;
pub mod message;
pub mod profile;
pub mod social;

use serde_json::Value;

use crate::engine::{Cursor, Shape, Validated};
use crate::record::{Record, RecordKind};

pub use app_data::AppData;
pub use farm::{Farm, FarmLocation, FarmRef, Plot, PlotLocation};
pub use follow::{Follow, FollowProfile};
pub use geo::{GcsLocation, GeoJsonPoint, GeoJsonPolygon, Position};
pub use list::{List, ListEntry, ListSet};
pub use listing::{
    Discount, ImageSize, Listing, ListingImage, ListingLocation, ListingPrice, ListingProduct,
    ListingQuantity, QuantityDiscount, ThresholdDiscount, TotalDiscount, DISCOUNT,
};
pub use message::{EventPtr, Message, MessageRecipient};
pub use profile::Profile;
pub use social::{Comment, Post, Reaction};

/// Decodes a payload into a [`Record`] of one fixed kind.
pub(crate) type RecordDecoder = fn(&Value, Cursor<'_>) -> Validated<Record>;

fn decode_into<T: Shape + Into<Record>>(value: &Value, at: Cursor<'_>) -> Validated<Record> {
    T::decode(value, at).map(Into::into)
}

/// The decoder registered for `kind`.
pub(crate) fn decoder(kind: RecordKind) -> RecordDecoder {
    match kind {
        RecordKind::Listing => decode_into::<Listing>,
        RecordKind::Profile => decode_into::<Profile>,
        RecordKind::Comment => decode_into::<Comment>,
        RecordKind::Reaction => decode_into::<Reaction>,
        RecordKind::Message => decode_into::<Message>,
        RecordKind::Follow => decode_into::<Follow>,
        RecordKind::List => decode_into::<List>,
        RecordKind::ListSet => decode_into::<ListSet>,
        RecordKind::Farm => decode_into::<Farm>,
        RecordKind::Plot => decode_into::<Plot>,
        RecordKind::GcsLocation => decode_into::<GcsLocation>,
        RecordKind::FarmRef => decode_into::<FarmRef>,
        RecordKind::Post => decode_into::<Post>,
        RecordKind::AppData => decode_into::<AppData>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValidationOptions;
    use serde_json::json;

    #[test]
    fn test_decoder_produces_matching_kind() {
        let options = ValidationOptions::default();
        let record = decoder(RecordKind::FarmRef)(
            &json!({"pubkey": "abc", "d_tag": "f1"}),
            Cursor::root(&options),
        )
        .unwrap();
        assert_eq!(record.kind(), RecordKind::FarmRef);
    }

    #[test]
    fn test_shape_names_match_selectors() {
        assert_eq!(Listing::NAME, RecordKind::Listing.as_str());
        assert_eq!(ListSet::NAME, RecordKind::ListSet.as_str());
        assert_eq!(GcsLocation::NAME, RecordKind::GcsLocation.as_str());
        assert_eq!(FarmRef::NAME, RecordKind::FarmRef.as_str());
        assert_eq!(AppData::NAME, RecordKind::AppData.as_str());
    }
}
