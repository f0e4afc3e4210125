//! Valid sample payloads for every record kind.

#![allow(dead_code)]

use radroots_schema::RecordKind;
use serde_json::{json, Value};

pub fn gcs_location() -> Value {
    json!({
        "lat": -1.2921,
        "lng": 36.8219,
        "geohash": "kzf0tvg",
        "point": {"type": "Point", "coordinates": [36.8219, -1.2921]},
        "polygon": {
            "type": "Polygon",
            "coordinates": [[
                [36.82, -1.29], [36.83, -1.29], [36.83, -1.30], [36.82, -1.30], [36.82, -1.29]
            ]]
        },
        "accuracy": 4.5,
        "elevation": 1795,
        "soil": "loam",
        "gc_country_id": "KE",
        "gc_country_name": "Kenya"
    })
}

pub fn farm_ref() -> Value {
    json!({"pubkey": "5f3a9c", "d_tag": "farm-kiambu"})
}

/// A valid payload of `kind`, exercising optionals, nesting and opaque values.
pub fn sample(kind: RecordKind) -> Value {
    match kind {
        RecordKind::Listing => json!({
            "d_tag": "AAAAAAAAAAAAAAAAAAAAAg",
            "product": {
                "key": "coffee-sl28",
                "title": "SL28 green coffee",
                "category": "coffee",
                "process": "washed",
                "year": "2025"
            },
            "quantities": [
                {"value": {"amount": "1", "unit": "kg"}, "label": "bag", "count": 40}
            ],
            "prices": [
                {"amount": {"amount": "12.50", "currency": "USD"}, "quantity": {"amount": "1", "unit": "kg"}}
            ],
            "discounts": [
                {"kind": "quantity", "amount": {"ref_quantity": "bag", "threshold": 10, "value": "5%"}},
                {"kind": "mass", "amount": {"threshold": "100kg", "value": "2.00"}},
                {"kind": "subtotal", "amount": {"threshold": "500", "value": "20"}},
                {"kind": "total", "amount": {"total_min": "1000", "value": "50"}}
            ],
            "location": {"primary": "Kiambu", "country": "KE", "lat": -1.17, "lng": 36.83},
            "images": [{"url": "https://img.example/sl28.jpg", "size": {"w": 1200, "h": 800}}]
        }),
        RecordKind::Profile => json!({
            "name": "kiambu-growers",
            "display_name": "Kiambu Growers",
            "about": "",
            "lud16": "growers@ln.example"
        }),
        RecordKind::Comment => json!({
            "root": {"id": "e1", "kind": 30402},
            "parent": ["e", "e2"],
            "content": "Is this still available?"
        }),
        RecordKind::Reaction => json!({"root": "e1", "content": "+"}),
        RecordKind::Message => json!({
            "recipients": [
                {"public_key": "pk-b", "relay_url": "wss://relay.example"},
                {"public_key": "pk-a"}
            ],
            "content": "Order confirmed",
            "reply_to": {"id": "e9"},
            "subject": "Order 42"
        }),
        RecordKind::Follow => json!({
            "list": [
                {"published_at": 1700000000, "public_key": "pk-a", "contact_name": "A"},
                {"published_at": 1700000123, "public_key": "pk-b"}
            ]
        }),
        RecordKind::List => json!({
            "content": "",
            "entries": [{"tag": "p", "values": ["pk-a", "pk-b"]}, {"tag": "t", "values": []}]
        }),
        RecordKind::ListSet => json!({
            "d_tag": "suppliers",
            "content": "",
            "entries": [{"tag": "p", "values": ["pk-a"]}],
            "title": "Suppliers"
        }),
        RecordKind::Farm => json!({
            "d_tag": "farm-kiambu",
            "name": "Kiambu Estate",
            "website": "https://farm.example",
            "location": {"city": "Kiambu", "gcs": gcs_location()},
            "tags": ["coffee", "tea"]
        }),
        RecordKind::Plot => json!({
            "d_tag": "plot-north",
            "farm": farm_ref(),
            "name": "North block",
            "location": {"primary": "North slope", "gcs": gcs_location()},
            "tags": []
        }),
        RecordKind::GcsLocation => gcs_location(),
        RecordKind::FarmRef => farm_ref(),
        RecordKind::Post => json!({"content": "Harvest starts Monday"}),
        RecordKind::AppData => json!({"d_tag": "settings", "content": "{\"theme\":\"dark\"}"}),
    }
}
