//! # radroots-schema: Record Validation & Normalization
//!
//! Validates untyped JSON payloads against the radroots record catalog and
//! produces normalized, typed records that re-serialize deterministically.
//!
//! ## Validation (`validate`)
//!
//! [`RecordValidator::validate`] takes a kind selector such as `"listing"`
//! and a [`serde_json::Value`], and returns either a [`Record`] or a
//! [`ValidationError`] listing every violation with its field path:
//!
//! ```ignore
//! let record = radroots_schema::validate("plot", &payload)?;
//! let wire = radroots_schema::serialize(&record)?;
//! ```
//!
//! ## Catalog (`catalog`)
//!
//! One Rust struct per record shape: listings with their discount union,
//! profiles, social records, messages, follows, lists, farms, plots and
//! geographic locations.
//!
//! ## Engine (`engine`)
//!
//! The validator combinators the catalog is written in. They are public so
//! downstream crates can validate their own embedded shapes the same way.
//!
//! ## Crate Policy
//!
//! - Depends only on `radroots-core` internally.
//! - Validation is pure: no I/O, no global mutable state.
//! - A record is only ever built from a payload with zero violations.

pub mod catalog;
pub mod engine;
pub mod options;
pub mod record;
pub mod validate;

pub use catalog::{
    AppData, Comment, Discount, EventPtr, Farm, FarmLocation, FarmRef, Follow, FollowProfile,
    GcsLocation, GeoJsonPoint, GeoJsonPolygon, ImageSize, List, ListEntry, ListSet, Listing,
    ListingImage, ListingLocation, ListingPrice, ListingProduct, ListingQuantity, Message,
    MessageRecipient, Plot, PlotLocation, Position, Post, Profile, QuantityDiscount, Reaction,
    ThresholdDiscount, TotalDiscount,
};
pub use options::{NullPolicy, UnknownFieldPolicy, ValidationOptions};
pub use radroots_core::{
    Arity, CanonicalizationError, FieldPath, JsonKind, OpaqueValue, RadrootsError, ValidationError,
    Violation, ViolationKind, Violations, WirePayload,
};
pub use record::{Record, RecordKind};
pub use validate::{serialize, validate, RecordValidator};
