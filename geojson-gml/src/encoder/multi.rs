use std::borrow::Cow;

use crate::attrs::Attributes;
use crate::encoder::{close, encode_with, open, GmlEncoder, GmlWriter};
use crate::error::GmlError;
use crate::geometry::{Geometry, LineStringType, Position, PolygonType};
use crate::geometry_type::GeometryType;
use crate::options::ElementOptions;
use crate::version::GmlVersion;

/// Members of a multi-geometry.
///
/// Members of `MultiPoint`, `MultiLineString` and `MultiPolygon` are untyped coordinate payloads whose type is
/// implied by the container. Members of a `GeometryCollection` carry their own type.
#[derive(Debug, Copy, Clone)]
pub enum Members<'a> {
    /// Point coordinates.
    Points(&'a [Position]),
    /// Line string coordinates.
    LineStrings(&'a [LineStringType]),
    /// Polygon rings.
    Polygons(&'a [PolygonType]),
    /// Typed geometries.
    Geometries(&'a [Geometry]),
}

impl Members<'_> {
    /// Type of the multi-geometry containing these members.
    pub fn container_type(&self) -> GeometryType {
        match self {
            Members::Points(_) => GeometryType::MultiPoint,
            Members::LineStrings(_) => GeometryType::MultiLineString,
            Members::Polygons(_) => GeometryType::MultiPolygon,
            Members::Geometries(_) => GeometryType::GeometryCollection,
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        match self {
            Members::Points(v) => v.len(),
            Members::LineStrings(v) => v.len(),
            Members::Polygons(v) => v.len(),
            Members::Geometries(v) => v.len(),
        }
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GmlEncoder {
    /// Encodes a multi-geometry, wrapping every member into a member element.
    ///
    /// | members         | GML 2 wrapper / member      | GML 3 wrapper / member         |
    /// |-----------------|-----------------------------|--------------------------------|
    /// | points          | `MultiPoint` / `pointMember` | `MultiPoint` / `pointMember`  |
    /// | line strings    | `MultiLineString` / `lineStringMember` | `MultiCurve` / `curveMember` |
    /// | polygons        | `MultiPolygon` / `polygonMember` | `MultiSurface` / `surfaceMember` |
    /// | geometries      | `MultiGeometry` / `<type>Member` | `MultiGeometry` / `geometryMember` |
    ///
    /// In GML 2 the member tag of a collection member is its type name with the first letter lower-cased,
    /// e.g. `lineStringMember`. Members never carry `srsName` in GML 2.
    ///
    /// In GML 3 members inherit `srsName` and `srsDimension`, and member `i` gets the `gml:id` of its own id,
    /// or `options.gml_ids[i]`, or none.
    pub fn encode_multi(
        &self,
        members: Members<'_>,
        options: &ElementOptions<'_>,
    ) -> Result<String, GmlError> {
        encode_with(|writer| self.write_multi(writer, members, options))
    }

    pub(super) fn write_multi(
        &self,
        writer: &mut GmlWriter,
        members: Members<'_>,
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        let wrapper = self.wrapper_name(members.container_type());
        log::trace!("Writing {wrapper} with {} members", members.len());

        open(writer, wrapper, &self.geometry_attributes(options))?;
        match members {
            Members::Points(points) => {
                let tag = self.member_tag(GeometryType::Point);
                for (idx, point) in points.iter().enumerate() {
                    let member_options = self.member_options(options, idx, None);
                    open(writer, &tag, &Attributes::new())?;
                    self.write_point(writer, point, &member_options)?;
                    close(writer, &tag)?;
                }
            }
            Members::LineStrings(lines) => {
                let tag = self.member_tag(GeometryType::LineString);
                for (idx, line) in lines.iter().enumerate() {
                    let member_options = self.member_options(options, idx, None);
                    open(writer, &tag, &Attributes::new())?;
                    self.write_line_string(writer, line, &member_options)?;
                    close(writer, &tag)?;
                }
            }
            Members::Polygons(polygons) => {
                let tag = self.member_tag(GeometryType::Polygon);
                for (idx, rings) in polygons.iter().enumerate() {
                    let member_options = self.member_options(options, idx, None);
                    open(writer, &tag, &Attributes::new())?;
                    self.write_polygon(writer, rings, &member_options)?;
                    close(writer, &tag)?;
                }
            }
            Members::Geometries(geometries) => {
                for (idx, geometry) in geometries.iter().enumerate() {
                    let tag = match self.version {
                        GmlVersion::V2_1_2 => self.member_tag(geometry.geometry_type()),
                        GmlVersion::V3_2_1 => Cow::Borrowed("geometryMember"),
                    };
                    let member_options =
                        self.member_options(options, idx, geometry.id.as_deref());
                    open(writer, &tag, &Attributes::new())?;
                    self.write_value(writer, &geometry.value, &member_options)?;
                    close(writer, &tag)?;
                }
            }
        }
        close(writer, wrapper)
    }

    fn wrapper_name(&self, container: GeometryType) -> &'static str {
        match (self.version, container) {
            (GmlVersion::V3_2_1, GeometryType::MultiLineString) => "MultiCurve",
            (GmlVersion::V3_2_1, GeometryType::MultiPolygon) => "MultiSurface",
            (_, GeometryType::GeometryCollection) => "MultiGeometry",
            (_, other) => other.as_str(),
        }
    }

    /// Member tag for a member of the given type.
    fn member_tag(&self, member: GeometryType) -> Cow<'static, str> {
        match (self.version, member) {
            (_, GeometryType::Point) => Cow::Borrowed("pointMember"),
            (GmlVersion::V2_1_2, GeometryType::LineString) => Cow::Borrowed("lineStringMember"),
            (GmlVersion::V2_1_2, GeometryType::Polygon) => Cow::Borrowed("polygonMember"),
            (GmlVersion::V2_1_2, other) => {
                Cow::Owned(format!("{}Member", lower_first(other.as_str())))
            }
            (GmlVersion::V3_2_1, GeometryType::LineString) => Cow::Borrowed("curveMember"),
            (GmlVersion::V3_2_1, GeometryType::Polygon) => Cow::Borrowed("surfaceMember"),
            (GmlVersion::V3_2_1, _) => Cow::Borrowed("geometryMember"),
        }
    }

    fn member_options<'a>(
        &self,
        parent: &ElementOptions<'a>,
        idx: usize,
        own_id: Option<&'a str>,
    ) -> ElementOptions<'a> {
        match self.version {
            GmlVersion::V2_1_2 => ElementOptions::default(),
            GmlVersion::V3_2_1 => parent.inherited(parent.member_id(idx, own_id)),
        }
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
