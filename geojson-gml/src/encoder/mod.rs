//! GML encoder.
//!
//! [`GmlEncoder`] holds the target [`GmlVersion`] and writes geometries as GML fragments. Both dialects share
//! the same recursion (geometry -> multi-geometry -> scalar geometry); the version only decides tag names,
//! coordinate elements and which attributes are written.
//!
//! Elements are written through a `quick-xml` [`Writer`] over an in-memory buffer. The output is a fragment: it
//! uses the `gml` prefix but declares no namespace.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::attrs::Attributes;
use crate::error::GmlError;
use crate::geometry::{Geometry, Value};
use crate::options::{ElementOptions, EncodeOptions};
use crate::version::GmlVersion;

mod multi;
mod scalar;

pub use multi::Members;

/// Namespace URI of GML 2.1.2 and earlier.
pub const GML2_NAMESPACE: &str = "http://www.opengis.net/gml";
/// Namespace URI of GML 3.2.
pub const GML3_NAMESPACE: &str = "http://www.opengis.net/gml/3.2";

type GmlWriter = Writer<Vec<u8>>;

/// Encodes geometries into GML of a single version.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct GmlEncoder {
    version: GmlVersion,
}

impl GmlEncoder {
    /// Creates a new encoder for the given version.
    pub fn new(version: GmlVersion) -> Self {
        Self { version }
    }

    /// GML 2.1.2 encoder.
    pub fn v2() -> Self {
        Self::new(GmlVersion::V2_1_2)
    }

    /// GML 3.2.1 encoder.
    pub fn v3() -> Self {
        Self::new(GmlVersion::V3_2_1)
    }

    /// Target version.
    pub fn version(&self) -> GmlVersion {
        self.version
    }

    /// Namespace URI the `gml` prefix must be bound to by the document embedding the output.
    pub fn namespace(&self) -> &'static str {
        match self.version {
            GmlVersion::V2_1_2 => GML2_NAMESPACE,
            GmlVersion::V3_2_1 => GML3_NAMESPACE,
        }
    }

    /// Encodes a geometry of any supported type.
    ///
    /// Missing `srs_name` is replaced with the version default. The root `gml:id` is `options.gml_id`, or the
    /// geometry's own id if no `gml_id` is given.
    pub fn encode_geometry(
        &self,
        geometry: &Geometry,
        options: &EncodeOptions,
    ) -> Result<String, GmlError> {
        log::debug!(
            "Encoding {} as GML {}",
            geometry.geometry_type(),
            self.version
        );
        if self.version == GmlVersion::V2_1_2 && options.has_v3_options() {
            log::debug!("srsDimension, gmlId and gmlIds are ignored for GML 2.1.2");
        }

        let root = options.root(self.version, geometry.id.as_deref());
        encode_with(|writer| self.write_value(writer, &geometry.value, &root))
    }

    /// Encodes a geometry payload using the given root element options as they are.
    pub fn encode_value(
        &self,
        value: &Value,
        options: &ElementOptions<'_>,
    ) -> Result<String, GmlError> {
        encode_with(|writer| self.write_value(writer, value, options))
    }

    fn write_value(
        &self,
        writer: &mut GmlWriter,
        value: &Value,
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        match value {
            Value::Point(coords) => self.write_point(writer, coords, options),
            Value::LineString(coords) => self.write_line_string(writer, coords, options),
            Value::Polygon(rings) => self.write_polygon(writer, rings, options),
            Value::MultiPoint(points) => self.write_multi(writer, Members::Points(points), options),
            Value::MultiLineString(lines) => {
                self.write_multi(writer, Members::LineStrings(lines), options)
            }
            Value::MultiPolygon(polygons) => {
                self.write_multi(writer, Members::Polygons(polygons), options)
            }
            Value::GeometryCollection(geometries) => {
                self.write_multi(writer, Members::Geometries(geometries), options)
            }
        }
    }

    /// Attributes of a geometry element: `srsName` (and `gml:id` for GML 3).
    fn geometry_attributes<'a>(&self, options: &ElementOptions<'a>) -> Attributes<'a> {
        match self.version {
            GmlVersion::V2_1_2 => Attributes::new().with("srsName", options.srs_name),
            GmlVersion::V3_2_1 => Attributes::new()
                .with("srsName", options.srs_name)
                .with("gml:id", options.gml_id),
        }
    }
}

/// Runs `write` against a fresh buffer. Nothing is returned if any step fails.
fn encode_with(
    write: impl FnOnce(&mut GmlWriter) -> Result<(), GmlError>,
) -> Result<String, GmlError> {
    let mut writer = Writer::new(Vec::new());
    write(&mut writer)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn open(writer: &mut GmlWriter, name: &str, attributes: &Attributes<'_>) -> Result<(), GmlError> {
    let mut start = BytesStart::new(format!("gml:{name}"));
    attributes.push_to(&mut start);
    writer.write_event(Event::Start(start))?;
    Ok(())
}

fn close(writer: &mut GmlWriter, name: &str) -> Result<(), GmlError> {
    writer.write_event(Event::End(BytesEnd::new(format!("gml:{name}"))))?;
    Ok(())
}

/// Writes `<gml:name attributes>text</gml:name>`.
fn text_element(
    writer: &mut GmlWriter,
    name: &str,
    attributes: &Attributes<'_>,
    text: &str,
) -> Result<(), GmlError> {
    open(writer, name, attributes)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    close(writer, name)
}
