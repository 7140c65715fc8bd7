//! In-memory GeoJSON geometry model consumed by the encoder.

use serde::{Deserialize, Serialize};

use crate::geometry_type::GeometryType;

/// Single coordinate tuple: `x, y` and optionally more dimensions. Arity is not validated.
pub type Position = Vec<f64>;
/// Coordinates of a line string or a polygon ring.
pub type LineStringType = Vec<Position>;
/// Rings of a polygon. Index 0 is the outer ring, the rest are holes.
pub type PolygonType = Vec<LineStringType>;

/// Geometry payload, tagged by geometry type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Value {
    /// Point coordinates.
    Point(Position),
    /// Line string coordinates.
    LineString(LineStringType),
    /// Polygon rings.
    Polygon(PolygonType),
    /// Coordinates of every point.
    MultiPoint(Vec<Position>),
    /// Coordinates of every line string.
    MultiLineString(Vec<LineStringType>),
    /// Rings of every polygon.
    MultiPolygon(Vec<PolygonType>),
    /// Typed member geometries.
    GeometryCollection(Vec<Geometry>),
}

impl Value {
    /// Type tag of the payload.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Value::Point(_) => GeometryType::Point,
            Value::LineString(_) => GeometryType::LineString,
            Value::Polygon(_) => GeometryType::Polygon,
            Value::MultiPoint(_) => GeometryType::MultiPoint,
            Value::MultiLineString(_) => GeometryType::MultiLineString,
            Value::MultiPolygon(_) => GeometryType::MultiPolygon,
            Value::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }
}

/// A geometry with an optional identifier.
///
/// The identifier is only meaningful for members of a [`Value::GeometryCollection`], where it becomes the
/// member's `gml:id` in GML 3.2.1 output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    /// Optional identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Geometry payload.
    pub value: Value,
}

impl Geometry {
    /// Creates a new geometry without identifier.
    pub fn new(value: Value) -> Self {
        Self { id: None, value }
    }

    /// Sets the identifier of the geometry.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        self.value.geometry_type()
    }
}

impl From<Value> for Geometry {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Vec<Geometry>> for Value {
    fn from(geometries: Vec<Geometry>) -> Self {
        Value::GeometryCollection(geometries)
    }
}

impl From<Vec<Geometry>> for Geometry {
    fn from(geometries: Vec<Geometry>) -> Self {
        Self::new(geometries.into())
    }
}
