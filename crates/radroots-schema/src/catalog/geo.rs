//! GeoJSON geometry and the geographic location record built on it.
//!
//! Coordinates are `[lng, lat]` pairs. Each pair must hold exactly two
//! numbers; rings are not checked for closure or winding, and the
//! `type` member is any string.

use radroots_core::Number;
use serde::Serialize;
use serde_json::Value;

use crate::engine::composite::decode_object;
use crate::engine::{shape, ArrayOf, Cursor, Numeric, Shape, Text, Tuple, Validated};

/// A longitude/latitude pair.
pub type Position = [Number; 2];

const POSITION: Tuple<Numeric, 2> = Tuple(Numeric);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonPoint {
    #[serde(rename = "type")]
    pub r#type: String,
    pub coordinates: Position,
}

impl Shape for GeoJsonPoint {
    const NAME: &'static str = "geojson_point";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => GeoJsonPoint {
            r#type as "type": required(Text),
            coordinates: required(POSITION),
        })
    }
}

/// A polygon as a list of rings, each a list of positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub r#type: String,
    pub coordinates: Vec<Vec<Position>>,
}

impl Shape for GeoJsonPolygon {
    const NAME: &'static str = "geojson_polygon";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => GeoJsonPolygon {
            r#type as "type": required(Text),
            coordinates: required(ArrayOf(ArrayOf(POSITION))),
        })
    }
}

/// A surveyed location with its geometry and optional gazetteer data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcsLocation {
    pub lat: Number,
    pub lng: Number,
    pub geohash: String,
    pub point: GeoJsonPoint,
    pub polygon: GeoJsonPolygon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_admin1_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_admin1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_country_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_country_name: Option<String>,
}

impl Shape for GcsLocation {
    const NAME: &'static str = "gcs_location";

    fn decode(value: &Value, at: Cursor<'_>) -> Validated<Self> {
        decode_object!(value, at => GcsLocation {
            lat: required(Numeric),
            lng: required(Numeric),
            geohash: required(Text),
            point: required(shape::<GeoJsonPoint>()),
            polygon: required(shape::<GeoJsonPolygon>()),
            accuracy: optional(Numeric),
            altitude: optional(Numeric),
            tag_0: optional(Text),
            label: optional(Text),
            area: optional(Numeric),
            elevation: optional(Numeric),
            soil: optional(Text),
            climate: optional(Text),
            gc_id: optional(Text),
            gc_name: optional(Text),
            gc_admin1_id: optional(Text),
            gc_admin1_name: optional(Text),
            gc_country_id: optional(Text),
            gc_country_name: optional(Text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValidationOptions;
    use radroots_core::{Arity, ViolationKind};
    use serde_json::json;

    fn decode<T: Shape>(value: Value) -> Validated<T> {
        let options = ValidationOptions::default();
        T::decode(&value, Cursor::root(&options))
    }

    fn location(point: Value, polygon: Value) -> Value {
        json!({
            "lat": 37.77,
            "lng": -122.41,
            "geohash": "9q8yy",
            "point": point,
            "polygon": polygon
        })
    }

    fn square() -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]
        })
    }

    #[test]
    fn test_point_serializes_type_key() {
        let point: GeoJsonPoint =
            decode(json!({"type": "Point", "coordinates": [-122.41, 37.77]})).unwrap();
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"type":"Point","coordinates":[-122.41,37.77]}"#
        );
    }

    #[test]
    fn test_point_arity() {
        for (coordinates, actual) in [(json!([1.0]), 1), (json!([1.0, 2.0, 3.0]), 3)] {
            let err = decode::<GcsLocation>(location(
                json!({"type": "Point", "coordinates": coordinates}),
                square(),
            ))
            .unwrap_err();
            assert_eq!(err.len(), 1);
            assert_eq!(err.violations()[0].path.to_string(), "/point/coordinates");
            assert_eq!(
                err.violations()[0].kind,
                ViolationKind::ArityMismatch {
                    expected: Arity::Exactly(2),
                    actual,
                }
            );
        }
    }

    #[test]
    fn test_polygon_position_arity() {
        let err = decode::<GeoJsonPolygon>(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0, 1, 2], [1, 1]], [[5]]]
        }))
        .unwrap_err();
        let paths: Vec<String> = err.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(paths, vec!["/coordinates/0/1", "/coordinates/1/0"]);
    }

    #[test]
    fn test_empty_polygon_accepted() {
        let polygon: GeoJsonPolygon =
            decode(json!({"type": "Polygon", "coordinates": []})).unwrap();
        assert!(polygon.coordinates.is_empty());
    }

    #[test]
    fn test_location_collects_geometry_and_scalar_failures() {
        let mut value = location(json!({"type": "Point", "coordinates": [1, "2"]}), square());
        value["geohash"] = json!(9);
        value["area"] = json!("large");
        let err = decode::<GcsLocation>(value).unwrap_err();
        let paths: Vec<String> = err.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(paths, vec!["/geohash", "/point/coordinates/1", "/area"]);
    }
}
