//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Encoding is all-or-nothing: any of these errors aborts the whole call and no markup is returned.
#[derive(Debug, Error)]
pub enum GmlError {
    /// Geometry `type` tag is not one of the seven GeoJSON geometry types.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    /// A geometry collection member has no `type` tag, or one that is not a geometry type name. Contains the
    /// serialized member.
    #[error("un-typed member {0}")]
    UntypedMember(String),

    /// Polygon without any rings. The outer ring is always required.
    #[error("polygon must contain at least one ring")]
    EmptyPolygon,

    /// Input JSON is not a GeoJSON geometry of the expected shape.
    #[error("invalid geometry json: {0}")]
    Json(#[from] serde_json::Error),

    /// Version string is not one of the supported GML versions.
    #[error("unknown GML version: {0}")]
    UnknownVersion(String),

    /// Writing markup into the output buffer failed.
    #[error("failed to write markup: {0}")]
    Write(#[from] std::io::Error),

    /// Written markup is not valid UTF-8.
    #[error("markup is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
