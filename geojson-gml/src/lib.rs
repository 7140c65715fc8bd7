//! Encoder of GeoJSON geometries into Geography Markup Language fragments.
//!
//! Two dialects are supported:
//!
//! * GML 2.1.2 simple features: coordinates are written into `coordinates` elements, polygon rings into
//!   `outerBoundaryIs`/`innerBoundaryIs`, multi-geometry members into `pointMember`, `lineStringMember` etc.
//! * GML 3.2.1: coordinates are written into `pos`/`posList` elements, geometries can carry `gml:id`
//!   attributes, multi-geometries use the `MultiCurve`/`MultiSurface` types with fixed member roles
//!   `pointMember`, `curveMember`, `surfaceMember` and `geometryMember`.
//!
//! ```
//! use geojson_gml::{geometry_to_gml, EncodeOptions, Geometry, GmlVersion};
//!
//! let point: Geometry = r#"{"type": "Point", "coordinates": [102.0, 0.5]}"#.parse()?;
//! let gml = geometry_to_gml(&point, GmlVersion::V2_1_2, &EncodeOptions::default())?;
//! assert_eq!(
//!     gml,
//!     r#"<gml:Point srsName="EPSG:4326"><gml:coordinates cs="," ts=" " decimal=".">102,0.5</gml:coordinates></gml:Point>"#
//! );
//! # Ok::<(), geojson_gml::error::GmlError>(())
//! ```
//!
//! The output is a fragment, not a document. The embedding document must bind the `gml` prefix to
//! [`GmlEncoder::namespace`] of the version used.
//!
//! SRS identifiers are written as given and never interpreted. Coordinates are not validated.

use serde_json::Value as JsonValue;

pub mod attrs;
pub mod coord;
pub mod encoder;
pub mod error;
#[cfg(feature = "geojson")]
mod geojson;
pub mod geometry;
pub mod geometry_type;
mod json;
pub mod options;
mod version;

#[cfg(test)]
mod tests;

pub use encoder::{GmlEncoder, Members};
pub use error::GmlError;
pub use geometry::{Geometry, LineStringType, PolygonType, Position, Value};
pub use geometry_type::GeometryType;
pub use options::{ElementOptions, EncodeOptions};
pub use version::GmlVersion;

/// Encodes a geometry as GML of the given version.
pub fn geometry_to_gml(
    geometry: &Geometry,
    version: GmlVersion,
    options: &EncodeOptions,
) -> Result<String, GmlError> {
    GmlEncoder::new(version).encode_geometry(geometry, options)
}

/// Encodes a geometry as GML 2.1.2. Only `srs_name` of the options is used.
pub fn to_gml2(geometry: &Geometry, options: &EncodeOptions) -> Result<String, GmlError> {
    geometry_to_gml(geometry, GmlVersion::V2_1_2, options)
}

/// Encodes a geometry as GML 3.2.1.
///
/// If `options.gml_id` is not set, the root `gml:id` is taken from the geometry's own `id`. Pass an explicit
/// `gml_id` to override it.
pub fn to_gml3(geometry: &Geometry, options: &EncodeOptions) -> Result<String, GmlError> {
    geometry_to_gml(geometry, GmlVersion::V3_2_1, options)
}

/// Reads a GeoJSON geometry object and encodes it as GML of the given version.
///
/// See [`Geometry::from_json`] for the errors reported for malformed input.
pub fn geometry_json_to_gml(
    json: &JsonValue,
    version: GmlVersion,
    options: &EncodeOptions,
) -> Result<String, GmlError> {
    let geometry = Geometry::from_json(json)?;
    geometry_to_gml(&geometry, version, options)
}
