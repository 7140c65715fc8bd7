//! Conversion from [`geojson`] crate geometries.
//!
//! A member's identifier is read from the foreign member `id`, which may be a string or a number.

use crate::geometry::{Geometry, Value};

impl From<&geojson::Value> for Value {
    fn from(value: &geojson::Value) -> Self {
        match value {
            geojson::Value::Point(p) => Value::Point(p.clone()),
            geojson::Value::MultiPoint(points) => Value::MultiPoint(points.clone()),
            geojson::Value::LineString(line) => Value::LineString(line.clone()),
            geojson::Value::MultiLineString(lines) => Value::MultiLineString(lines.clone()),
            geojson::Value::Polygon(polygon) => Value::Polygon(polygon.clone()),
            geojson::Value::MultiPolygon(mp) => Value::MultiPolygon(mp.clone()),
            geojson::Value::GeometryCollection(geometries) => {
                Value::GeometryCollection(geometries.iter().map(Geometry::from).collect())
            }
        }
    }
}

impl From<&geojson::Geometry> for Geometry {
    fn from(geometry: &geojson::Geometry) -> Self {
        Geometry {
            id: foreign_id(geometry),
            value: Value::from(&geometry.value),
        }
    }
}

impl From<geojson::Geometry> for Geometry {
    fn from(geometry: geojson::Geometry) -> Self {
        Geometry::from(&geometry)
    }
}

fn foreign_id(geometry: &geojson::Geometry) -> Option<String> {
    match geometry.foreign_members.as_ref()?.get("id")? {
        serde_json::Value::String(id) => Some(id.clone()),
        serde_json::Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
