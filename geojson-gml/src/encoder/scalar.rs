use crate::attrs::Attributes;
use crate::coord::{write_position, write_positions};
use crate::encoder::{close, encode_with, open, text_element, GmlEncoder, GmlWriter};
use crate::error::GmlError;
use crate::geometry::{LineStringType, Position};
use crate::options::ElementOptions;
use crate::version::GmlVersion;

impl GmlEncoder {
    /// Encodes a point.
    ///
    /// GML 2: `<gml:Point><gml:coordinates ...>x,y</gml:coordinates></gml:Point>`.
    /// GML 3: `<gml:Point><gml:pos>x y</gml:pos></gml:Point>`.
    pub fn encode_point(
        &self,
        coords: &[f64],
        options: &ElementOptions<'_>,
    ) -> Result<String, GmlError> {
        encode_with(|writer| self.write_point(writer, coords, options))
    }

    /// Encodes a line string. Coordinates go into `coordinates` (GML 2) or `posList` (GML 3).
    pub fn encode_line_string(
        &self,
        coords: &[Position],
        options: &ElementOptions<'_>,
    ) -> Result<String, GmlError> {
        encode_with(|writer| self.write_line_string(writer, coords, options))
    }

    /// Encodes a closed ring. Closure of the ring is not checked.
    pub fn encode_linear_ring(
        &self,
        coords: &[Position],
        options: &ElementOptions<'_>,
    ) -> Result<String, GmlError> {
        encode_with(|writer| self.write_linear_ring(writer, coords, options))
    }

    /// Encodes a polygon. The first ring is the outer boundary, all others are holes.
    ///
    /// Rings are written without attributes. Fails with [`GmlError::EmptyPolygon`] if there are no rings.
    pub fn encode_polygon(
        &self,
        rings: &[LineStringType],
        options: &ElementOptions<'_>,
    ) -> Result<String, GmlError> {
        encode_with(|writer| self.write_polygon(writer, rings, options))
    }

    pub(super) fn write_point(
        &self,
        writer: &mut GmlWriter,
        coords: &[f64],
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        log::trace!("Writing point with {} ordinates", coords.len());

        let mut text = String::new();
        open(writer, "Point", &self.geometry_attributes(options))?;
        match self.version {
            GmlVersion::V2_1_2 => {
                write_position(&mut text, coords, ',');
                text_element(writer, "coordinates", &v2_coordinates_attributes(), &text)?;
            }
            GmlVersion::V3_2_1 => {
                write_position(&mut text, coords, ' ');
                text_element(writer, "pos", &dimension_attributes(options), &text)?;
            }
        }
        close(writer, "Point")
    }

    pub(super) fn write_line_string(
        &self,
        writer: &mut GmlWriter,
        coords: &[Position],
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        log::trace!("Writing line string with {} positions", coords.len());
        self.write_curve(
            writer,
            "LineString",
            &self.geometry_attributes(options),
            coords,
            options,
        )
    }

    pub(super) fn write_linear_ring(
        &self,
        writer: &mut GmlWriter,
        coords: &[Position],
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        let attributes = match self.version {
            GmlVersion::V2_1_2 => Attributes::new().with("srsName", options.srs_name),
            GmlVersion::V3_2_1 => Attributes::new()
                .with("gml:id", options.gml_id)
                .with("srsName", options.srs_name),
        };
        self.write_curve(writer, "LinearRing", &attributes, coords, options)
    }

    pub(super) fn write_polygon(
        &self,
        writer: &mut GmlWriter,
        rings: &[LineStringType],
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        let Some((outer, inner)) = rings.split_first() else {
            return Err(GmlError::EmptyPolygon);
        };
        log::trace!("Writing polygon with {} holes", inner.len());

        let (outer_tag, inner_tag) = match self.version {
            GmlVersion::V2_1_2 => ("outerBoundaryIs", "innerBoundaryIs"),
            GmlVersion::V3_2_1 => ("exterior", "interior"),
        };
        let ring_options = ElementOptions::default();

        open(writer, "Polygon", &self.geometry_attributes(options))?;
        open(writer, outer_tag, &Attributes::new())?;
        self.write_linear_ring(writer, outer, &ring_options)?;
        close(writer, outer_tag)?;
        for ring in inner {
            open(writer, inner_tag, &Attributes::new())?;
            self.write_linear_ring(writer, ring, &ring_options)?;
            close(writer, inner_tag)?;
        }
        close(writer, "Polygon")
    }

    fn write_curve(
        &self,
        writer: &mut GmlWriter,
        name: &str,
        attributes: &Attributes<'_>,
        coords: &[Position],
        options: &ElementOptions<'_>,
    ) -> Result<(), GmlError> {
        let mut text = String::new();
        open(writer, name, attributes)?;
        match self.version {
            GmlVersion::V2_1_2 => {
                write_positions(&mut text, coords, ',', ' ');
                text_element(writer, "coordinates", &v2_coordinates_attributes(), &text)?;
            }
            GmlVersion::V3_2_1 => {
                write_positions(&mut text, coords, ' ', ' ');
                text_element(writer, "posList", &dimension_attributes(options), &text)?;
            }
        }
        close(writer, name)
    }
}

/// Separators declared on every GML 2 `coordinates` element.
fn v2_coordinates_attributes() -> Attributes<'static> {
    Attributes::new()
        .with("cs", Some(","))
        .with("ts", Some(" "))
        .with("decimal", Some("."))
}

fn dimension_attributes<'a>(options: &ElementOptions<'a>) -> Attributes<'a> {
    Attributes::new().with_number("srsDimension", options.srs_dimension)
}
