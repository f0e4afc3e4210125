//! # Marketplace Listings
//!
//! A listing advertises one product with its available quantities, prices,
//! and optional discounts, location and images. Quantity values, price
//! amounts and discount thresholds are carried as [`OpaqueValue`]: their
//! money and unit semantics belong to the trade layer.
//!
//! Discounts are a closed union tagged by `kind`, with the variant payload
//! under `amount`:
//!
//! | `kind`     | `amount` fields                         |
//! |------------|-----------------------------------------|
//! | `quantity` | `ref_quantity`, `threshold`, `value`    |
//! | `mass`     | `threshold`, `value`                    |
//! | `subtotal` | `threshold`, `value`                    |
//! | `total`    | `total_min`, `value`                    |

use radroots_core::{Number, OpaqueValue};
use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{
    decode_adjacent, shape, ArrayOf, Cursor, Numeric, Opaque, Shape, TaggedUnion, Text,
    Validated, Variant,
};

/// A product listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    /// Identifier within the publisher's namespace.
    pub d_tag: String,
    pub product: ListingProduct,
    pub quantities: Vec<ListingQuantity>,
    pub prices: Vec<ListingPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<Discount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ListingLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ListingImage>>,
}

impl Shape for Listing {
    const NAME: &'static str = "listing";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => Listing {
            d_tag: required(Text),
            product: required(shape::<ListingProduct>()),
            quantities: required(ArrayOf(shape::<ListingQuantity>())),
            prices: required(ArrayOf(shape::<ListingPrice>())),
            discounts: optional(ArrayOf(&DISCOUNT)),
            location: optional(shape::<ListingLocation>()),
            images: optional(ArrayOf(shape::<ListingImage>())),
        })
    }
}

/// What is being sold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingProduct {
    pub key: String,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Shape for ListingProduct {
    const NAME: &'static str = "listing_product";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListingProduct {
            key: required(Text),
            title: required(Text),
            category: required(Text),
            summary: optional(Text),
            process: optional(Text),
            lot: optional(Text),
            location: optional(Text),
            profile: optional(Text),
            year: optional(Text),
        })
    }
}

/// One offered quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingQuantity {
    pub value: OpaqueValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Number>,
}

impl Shape for ListingQuantity {
    const NAME: &'static str = "listing_quantity";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListingQuantity {
            value: required(Opaque),
            label: optional(Text),
            count: optional(Numeric),
        })
    }
}

/// A price paired with the quantity it applies to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPrice {
    pub amount: OpaqueValue,
    pub quantity: OpaqueValue,
}

impl Shape for ListingPrice {
    const NAME: &'static str = "listing_price";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListingPrice {
            amount: required(Opaque),
            quantity: required(Opaque),
        })
    }
}

/// Where the listed goods are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingLocation {
    /// Free-text primary location.
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geohash: Option<String>,
}

impl Shape for ListingLocation {
    const NAME: &'static str = "listing_location";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListingLocation {
            primary: required(Text),
            city: optional(Text),
            region: optional(Text),
            country: optional(Text),
            lat: optional(Numeric),
            lng: optional(Numeric),
            geohash: optional(Text),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
}

impl Shape for ListingImage {
    const NAME: &'static str = "listing_image";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ListingImage {
            url: required(Text),
            size: optional(shape::<ImageSize>()),
        })
    }
}

/// Pixel dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSize {
    pub w: Number,
    pub h: Number,
}

impl Shape for ImageSize {
    const NAME: &'static str = "image_size";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ImageSize {
            w: required(Numeric),
            h: required(Numeric),
        })
    }
}

// ---------------------------------------------------------------------------
// Discounts
// ---------------------------------------------------------------------------

/// A listing discount, one variant per `kind` literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Discount {
    Quantity(QuantityDiscount),
    Mass(ThresholdDiscount),
    Subtotal(ThresholdDiscount),
    Total(TotalDiscount),
}

impl Discount {
    /// The `kind` literal this variant is tagged with.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Quantity(_) => "quantity",
            Self::Mass(_) => "mass",
            Self::Subtotal(_) => "subtotal",
            Self::Total(_) => "total",
        }
    }
}

/// Discount applied once a referenced quantity reaches a threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityDiscount {
    pub ref_quantity: String,
    pub threshold: OpaqueValue,
    pub value: OpaqueValue,
}

impl Shape for QuantityDiscount {
    const NAME: &'static str = "quantity_discount";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => QuantityDiscount {
            ref_quantity: required(Text),
            threshold: required(Opaque),
            value: required(Opaque),
        })
    }
}

/// Discount applied above a mass or subtotal threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdDiscount {
    pub threshold: OpaqueValue,
    pub value: OpaqueValue,
}

impl Shape for ThresholdDiscount {
    const NAME: &'static str = "threshold_discount";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => ThresholdDiscount {
            threshold: required(Opaque),
            value: required(Opaque),
        })
    }
}

/// Discount applied once the order total reaches a minimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalDiscount {
    pub total_min: OpaqueValue,
    pub value: OpaqueValue,
}

impl Shape for TotalDiscount {
    const NAME: &'static str = "total_discount";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => TotalDiscount {
            total_min: required(Opaque),
            value: required(Opaque),
        })
    }
}

fn quantity_variant(value: &Value, at: Cursor<'_>) -> Validated<Discount> {
    decode_adjacent(value, at, "kind", "amount", Discount::Quantity)
}

fn mass_variant(value: &Value, at: Cursor<'_>) -> Validated<Discount> {
    decode_adjacent(value, at, "kind", "amount", Discount::Mass)
}

fn subtotal_variant(value: &Value, at: Cursor<'_>) -> Validated<Discount> {
    decode_adjacent(value, at, "kind", "amount", Discount::Subtotal)
}

fn total_variant(value: &Value, at: Cursor<'_>) -> Validated<Discount> {
    decode_adjacent(value, at, "kind", "amount", Discount::Total)
}

/// The registered discount variants.
pub static DISCOUNT: TaggedUnion<Discount> = TaggedUnion {
    discriminant: "kind",
    variants: &[
        Variant {
            tag: "quantity",
            decode: quantity_variant,
        },
        Variant {
            tag: "mass",
            decode: mass_variant,
        },
        Variant {
            tag: "subtotal",
            decode: subtotal_variant,
        },
        Variant {
            tag: "total",
            decode: total_variant,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Validator;
    use crate::options::ValidationOptions;
    use radroots_core::ViolationKind;
    use serde_json::json;

    fn discount(value: Value) -> Validated<Discount> {
        let options = ValidationOptions::default();
        DISCOUNT.validate(&value, Cursor::root(&options))
    }

    fn listing(value: Value) -> Validated<Listing> {
        let options = ValidationOptions::default();
        Listing::decode(&value, Cursor::root(&options))
    }

    #[test]
    fn test_quantity_discount() {
        let d = discount(json!({
            "kind": "quantity",
            "amount": {"ref_quantity": "q1", "threshold": 10, "value": {"percent": "5"}}
        }))
        .unwrap();
        assert_eq!(d.kind(), "quantity");
        match d {
            Discount::Quantity(q) => assert_eq!(q.ref_quantity, "q1"),
            other => panic!("expected quantity discount, got {other:?}"),
        }
    }

    #[test]
    fn test_mass_and_subtotal_share_amount_shape() {
        let amount = json!({"threshold": "5kg", "value": "1.00"});
        let mass = discount(json!({"kind": "mass", "amount": amount.clone()})).unwrap();
        let subtotal = discount(json!({"kind": "subtotal", "amount": amount})).unwrap();
        assert!(matches!(mass, Discount::Mass(_)));
        assert!(matches!(subtotal, Discount::Subtotal(_)));
    }

    #[test]
    fn test_total_missing_total_min() {
        // `threshold` would satisfy mass/subtotal but must not be accepted here.
        let err = discount(json!({
            "kind": "total",
            "amount": {"threshold": 100, "value": 5}
        }))
        .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].kind, ViolationKind::MissingField);
        assert_eq!(err.violations()[0].path.to_string(), "/amount/total_min");
    }

    #[test]
    fn test_unrecognized_kind() {
        let err = discount(json!({"kind": "bulk", "amount": {}})).unwrap_err();
        assert_eq!(
            err.violations()[0].kind,
            ViolationKind::UnrecognizedVariant {
                found: "bulk".to_string(),
                expected: vec!["quantity", "mass", "subtotal", "total"],
            }
        );
    }

    #[test]
    fn test_discount_serializes_kind_then_amount() {
        let d = Discount::Total(TotalDiscount {
            total_min: OpaqueValue::new(json!(50)),
            value: OpaqueValue::new(json!(5)),
        });
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"kind":"total","amount":{"total_min":50,"value":5}}"#
        );
    }

    #[test]
    fn test_minimal_listing_has_absent_optionals() {
        let l = listing(json!({
            "d_tag": "AAAAAAAAAAAAAAAAAAAAAA",
            "product": {"key": "coffee", "title": "Coffee", "category": "beverage"},
            "quantities": [],
            "prices": []
        }))
        .unwrap();
        assert!(l.discounts.is_none());
        assert!(l.location.is_none());
        assert!(l.images.is_none());
        assert!(l.product.summary.is_none());
    }

    #[test]
    fn test_listing_reports_nested_paths() {
        let err = listing(json!({
            "d_tag": "x",
            "product": {"key": "k", "title": 1},
            "quantities": [{"label": "bag"}],
            "prices": [],
            "discounts": [{"kind": "total", "amount": {"value": 1}}],
            "images": [{"url": "u", "size": {"w": 10}}]
        }))
        .unwrap_err();
        let paths: Vec<String> = err.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "/product/title",
                "/product/category",
                "/quantities/0/value",
                "/discounts/0/amount/total_min",
                "/images/0/size/h",
            ]
        );
    }

    #[test]
    fn test_price_amount_is_opaque() {
        let l = listing(json!({
            "d_tag": "x",
            "product": {"key": "k", "title": "t", "category": "c"},
            "quantities": [{"value": {"amount": "1", "unit": "kg"}, "count": 3}],
            "prices": [{"amount": {"amount": "4.50", "currency": "USD"}, "quantity": null}]
        }))
        .unwrap();
        assert_eq!(l.prices[0].quantity.as_value(), &Value::Null);
        assert_eq!(l.quantities[0].count.as_ref().and_then(Number::as_u64), Some(3));
    }
}
