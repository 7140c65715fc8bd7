//! Reading geometries from GeoJSON text or [`serde_json::Value`].
//!
//! Only the `type`, `coordinates`, `geometries` and `id` members are read; everything else in the object is
//! ignored. Coordinate arity is not validated.

use std::str::FromStr;

use serde_json::Value as JsonValue;

use crate::error::GmlError;
use crate::geometry::{Geometry, Value};
use crate::geometry_type::GeometryType;

impl Geometry {
    /// Reads a GeoJSON geometry object.
    ///
    /// Fails with [`GmlError::UnsupportedGeometryType`] if the root `type` is missing or unknown, and with
    /// [`GmlError::UntypedMember`] if a member of a geometry collection has no recognizable `type`.
    pub fn from_json(json: &JsonValue) -> Result<Self, GmlError> {
        let geometry_type = match json.get("type") {
            Some(JsonValue::String(name)) => name.parse::<GeometryType>()?,
            Some(other) => return Err(GmlError::UnsupportedGeometryType(other.to_string())),
            None => return Err(GmlError::UnsupportedGeometryType("undefined".into())),
        };

        Ok(Geometry {
            id: read_id(json),
            value: read_value(geometry_type, json)?,
        })
    }

    /// Reads a member of a geometry collection. A missing, empty, non-string or unknown `type` makes the
    /// member untyped.
    fn member_from_json(json: &JsonValue) -> Result<Self, GmlError> {
        let typed = json
            .get("type")
            .and_then(JsonValue::as_str)
            .is_some_and(|name| name.parse::<GeometryType>().is_ok());
        if !typed {
            return Err(GmlError::UntypedMember(json.to_string()));
        }

        Self::from_json(json)
    }
}

impl TryFrom<&JsonValue> for Geometry {
    type Error = GmlError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        Geometry::from_json(value)
    }
}

impl TryFrom<JsonValue> for Geometry {
    type Error = GmlError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Geometry::from_json(&value)
    }
}

impl FromStr for Geometry {
    type Err = GmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json: JsonValue = serde_json::from_str(s)?;
        Geometry::from_json(&json)
    }
}

fn read_value(geometry_type: GeometryType, json: &JsonValue) -> Result<Value, GmlError> {
    let coordinates = || json.get("coordinates").cloned().unwrap_or(JsonValue::Null);
    let value = match geometry_type {
        GeometryType::Point => Value::Point(serde_json::from_value(coordinates())?),
        GeometryType::LineString => Value::LineString(serde_json::from_value(coordinates())?),
        GeometryType::Polygon => Value::Polygon(serde_json::from_value(coordinates())?),
        GeometryType::MultiPoint => Value::MultiPoint(serde_json::from_value(coordinates())?),
        GeometryType::MultiLineString => {
            Value::MultiLineString(serde_json::from_value(coordinates())?)
        }
        GeometryType::MultiPolygon => Value::MultiPolygon(serde_json::from_value(coordinates())?),
        GeometryType::GeometryCollection => Value::GeometryCollection(read_members(json)?),
    };

    Ok(value)
}

fn read_members(json: &JsonValue) -> Result<Vec<Geometry>, GmlError> {
    match json.get("geometries") {
        Some(JsonValue::Array(members)) => members.iter().map(Geometry::member_from_json).collect(),
        Some(JsonValue::Null) | None => Ok(vec![]),
        Some(other) => Err(GmlError::Json(serde::de::Error::custom(format!(
            "geometries must be an array, got {other}"
        )))),
    }
}

fn read_id(json: &JsonValue) -> Option<String> {
    match json.get("id")? {
        JsonValue::String(id) => Some(id.clone()),
        JsonValue::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
