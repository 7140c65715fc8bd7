//! Encoding of the GeoJSON specification examples in both dialects.

use assert_matches::assert_matches;
use insta::assert_snapshot;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use serde_json::json;

use crate::{
    geometry_json_to_gml, to_gml2, to_gml3, EncodeOptions, Geometry, GmlEncoder, GmlError,
    GmlVersion,
};

fn parse(json: &str) -> Geometry {
    json.parse().expect("invalid fixture")
}

fn point() -> Geometry {
    parse(r#"{"type": "Point", "coordinates": [102.0, 0.5]}"#)
}

fn line() -> Geometry {
    parse(
        r#"{"type": "LineString", "coordinates": [[102.0, 0.0], [103.0, 1.0], [104.0, 0.0], [105.0, 1.0]]}"#,
    )
}

fn polygon() -> Geometry {
    parse(
        r#"{"type": "Polygon", "coordinates": [
            [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]]
        ]}"#,
    )
}

fn multi_point() -> Geometry {
    parse(r#"{"type": "MultiPoint", "coordinates": [[100.0, 0.0], [101.0, 1.0]]}"#)
}

fn multi_line_string() -> Geometry {
    parse(
        r#"{"type": "MultiLineString", "coordinates": [
            [[100.0, 0.0], [101.0, 1.0]],
            [[102.0, 2.0], [103.0, 3.0]]
        ]}"#,
    )
}

fn multi_polygon() -> Geometry {
    parse(
        r#"{"type": "MultiPolygon", "coordinates": [
            [[[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]],
            [
                [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
                [[100.2, 0.2], [100.8, 0.2], [100.8, 0.8], [100.2, 0.8], [100.2, 0.2]]
            ]
        ]}"#,
    )
}

fn geometry_collection() -> Geometry {
    parse(
        r#"{"type": "GeometryCollection", "geometries": [
            {"type": "Point", "coordinates": [100.0, 0.0]},
            {"type": "LineString", "coordinates": [[101.0, 0.0], [102.0, 1.0]]}
        ]}"#,
    )
}

fn all_geometries() -> Vec<Geometry> {
    vec![
        point(),
        line(),
        polygon(),
        multi_point(),
        multi_line_string(),
        multi_polygon(),
        geometry_collection(),
    ]
}

/// Wraps a fragment into a root element binding the `gml` prefix and checks that the result is well-formed
/// and that every element other than the root is in the GML namespace.
fn assert_well_formed(fragment: &str, namespace: &str) {
    let document = format!(r#"<root xmlns:gml="{namespace}">{fragment}</root>"#);
    let mut reader = NsReader::from_str(&document);
    let mut depth = 0usize;
    let mut elements = 0usize;

    loop {
        let (resolved, event) = reader
            .read_resolved_event()
            .unwrap_or_else(|e| panic!("malformed xml {document}: {e}"));
        match event {
            Event::Start(start) => {
                for attribute in start.attributes() {
                    attribute.unwrap_or_else(|e| panic!("bad attribute in {document}: {e}"));
                }
                if depth > 0 {
                    elements += 1;
                    assert_matches!(resolved, ResolveResult::Bound(ns) if ns.as_ref() == namespace.as_bytes());
                }
                depth += 1;
            }
            Event::End(_) => depth -= 1,
            Event::Empty(_) => panic!("unexpected empty element in {document}"),
            Event::Eof => break,
            _ => {}
        }
    }

    assert_eq!(depth, 0);
    assert!(elements > 0);
}

#[test]
fn all_types_are_well_formed_gml2() {
    for geometry in all_geometries() {
        let gml = to_gml2(&geometry, &EncodeOptions::default()).unwrap();
        assert_well_formed(&gml, GmlEncoder::v2().namespace());
    }
}

#[test]
fn all_types_are_well_formed_gml3() {
    let options = EncodeOptions::default()
        .with_srs_dimension(2)
        .with_gml_id("f.1")
        .with_gml_ids(["m.1", "m.2"]);
    for geometry in all_geometries() {
        let gml = to_gml3(&geometry, &options).unwrap();
        assert_well_formed(&gml, GmlEncoder::v3().namespace());
    }
}

#[test]
fn escaped_attributes_stay_well_formed() {
    let options = EncodeOptions::default()
        .with_srs_name("urn:x?a=1&b=2")
        .with_gml_id(r#"<"id">"#);
    let gml = to_gml3(&polygon(), &options).unwrap();
    assert_well_formed(&gml, GmlEncoder::v3().namespace());
}

#[test]
fn gml2_point() {
    assert_snapshot!(
        to_gml2(&point(), &EncodeOptions::default()).unwrap(),
        @r#"<gml:Point srsName="EPSG:4326"><gml:coordinates cs="," ts=" " decimal=".">102,0.5</gml:coordinates></gml:Point>"#
    );
}

#[test]
fn gml2_multi_point_members_in_order() {
    let gml = to_gml2(&multi_point(), &EncodeOptions::default()).unwrap();
    assert!(gml.starts_with(r#"<gml:MultiPoint srsName="EPSG:4326">"#));
    assert!(gml.ends_with("</gml:MultiPoint>"));
    assert_eq!(gml.matches("<gml:pointMember>").count(), 2);

    let first = gml.find(">100,0<").unwrap();
    let second = gml.find(">101,1<").unwrap();
    assert!(first < second);
}

#[test]
fn gml3_multi_polygon() {
    let gml = to_gml3(
        &multi_polygon(),
        &EncodeOptions::default().with_gml_ids(["a", "b"]),
    )
    .unwrap();
    assert_snapshot!(gml, @r#"<gml:MultiSurface srsName="http://www.opengis.net/def/crs/EPSG/0/4326"><gml:surfaceMember><gml:Polygon srsName="http://www.opengis.net/def/crs/EPSG/0/4326" gml:id="a"><gml:exterior><gml:LinearRing><gml:posList>102 2 103 2 103 3 102 3 102 2</gml:posList></gml:LinearRing></gml:exterior></gml:Polygon></gml:surfaceMember><gml:surfaceMember><gml:Polygon srsName="http://www.opengis.net/def/crs/EPSG/0/4326" gml:id="b"><gml:exterior><gml:LinearRing><gml:posList>100 0 101 0 101 1 100 1 100 0</gml:posList></gml:LinearRing></gml:exterior><gml:interior><gml:LinearRing><gml:posList>100.2 0.2 100.8 0.2 100.8 0.8 100.2 0.8 100.2 0.2</gml:posList></gml:LinearRing></gml:interior></gml:Polygon></gml:surfaceMember></gml:MultiSurface>"#);
}

#[test]
fn geometry_collection_in_both_dialects() {
    let options = EncodeOptions::default().without_srs_name();

    assert_snapshot!(
        to_gml2(&geometry_collection(), &options).unwrap(),
        @r#"<gml:MultiGeometry><gml:pointMember><gml:Point><gml:coordinates cs="," ts=" " decimal=".">100,0</gml:coordinates></gml:Point></gml:pointMember><gml:lineStringMember><gml:LineString><gml:coordinates cs="," ts=" " decimal=".">101,0 102,1</gml:coordinates></gml:LineString></gml:lineStringMember></gml:MultiGeometry>"#
    );
    assert_snapshot!(
        to_gml3(&geometry_collection(), &options).unwrap(),
        @"<gml:MultiGeometry><gml:geometryMember><gml:Point><gml:pos>100 0</gml:pos></gml:Point></gml:geometryMember><gml:geometryMember><gml:LineString><gml:posList>101 0 102 1</gml:posList></gml:LineString></gml:geometryMember></gml:MultiGeometry>"
    );
}

#[test]
fn empty_srs_name_is_omitted_everywhere() {
    let options = EncodeOptions::default().without_srs_name();
    for version in [GmlVersion::V2_1_2, GmlVersion::V3_2_1] {
        for geometry in all_geometries() {
            let gml = crate::geometry_to_gml(&geometry, version, &options).unwrap();
            assert!(!gml.contains("srsName"), "{gml}");
        }
    }
}

#[test]
fn custom_srs_name_on_root_only_in_gml2() {
    let options = EncodeOptions::default().with_srs_name("EPSG:3857");
    let gml = to_gml2(&multi_line_string(), &options).unwrap();
    assert_eq!(gml.matches(r#"srsName="EPSG:3857""#).count(), 1);

    let gml = to_gml3(&multi_line_string(), &options).unwrap();
    assert_eq!(gml.matches(r#"srsName="EPSG:3857""#).count(), 3);
}

#[test]
fn unsupported_type_from_json() {
    let result = geometry_json_to_gml(
        &json!({"type": "Foo", "coordinates": [1.0, 2.0]}),
        GmlVersion::V2_1_2,
        &EncodeOptions::default(),
    );
    assert_matches!(result, Err(GmlError::UnsupportedGeometryType(name)) if name == "Foo");
}

#[test]
fn untyped_member_from_json() {
    let result = geometry_json_to_gml(
        &json!({"type": "GeometryCollection", "geometries": [{"coordinates": [1.0, 2.0]}]}),
        GmlVersion::V3_2_1,
        &EncodeOptions::default(),
    );
    assert_matches!(result, Err(GmlError::UntypedMember(_)));
}

#[test]
fn unknown_member_type_from_json() {
    for member_type in [json!("Circle"), json!("")] {
        let result = geometry_json_to_gml(
            &json!({
                "type": "GeometryCollection",
                "geometries": [{"type": member_type, "coordinates": [1.0, 2.0]}]
            }),
            GmlVersion::V2_1_2,
            &EncodeOptions::default(),
        );
        assert_matches!(result, Err(GmlError::UntypedMember(member)) if member.contains("coordinates"));
    }
}

#[test]
fn gml3_polygon_rings_ignore_dimension() {
    let options = EncodeOptions::default()
        .without_srs_name()
        .with_srs_dimension(2);
    assert_snapshot!(
        to_gml3(&polygon(), &options).unwrap(),
        @"<gml:Polygon><gml:exterior><gml:LinearRing><gml:posList>100 0 101 0 101 1 100 1 100 0</gml:posList></gml:LinearRing></gml:exterior></gml:Polygon>"
    );
}

#[test]
fn gml3_root_id() {
    let options = EncodeOptions::default().without_srs_name();
    let geometry = point().with_id("own");

    assert_snapshot!(
        to_gml3(&geometry, &options).unwrap(),
        @r#"<gml:Point gml:id="own"><gml:pos>102 0.5</gml:pos></gml:Point>"#
    );
    assert_snapshot!(
        to_gml3(&geometry, &options.with_gml_id("explicit")).unwrap(),
        @r#"<gml:Point gml:id="explicit"><gml:pos>102 0.5</gml:pos></gml:Point>"#
    );
}

#[test]
fn options_from_json() {
    let options: EncodeOptions =
        serde_json::from_value(json!({"srsName": "EPSG:4326", "gmlId": "roads.15"})).unwrap();
    let gml = geometry_json_to_gml(
        &json!({"type": "Point", "coordinates": [-41.1716, 146.1036]}),
        GmlVersion::V3_2_1,
        &options,
    )
    .unwrap();
    assert_snapshot!(gml, @r#"<gml:Point srsName="EPSG:4326" gml:id="roads.15"><gml:pos>-41.1716 146.1036</gml:pos></gml:Point>"#);
}

#[test]
fn encoding_is_deterministic_across_threads() {
    let geometry = multi_polygon();
    let expected = to_gml3(&geometry, &EncodeOptions::default()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| to_gml3(&geometry, &EncodeOptions::default()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
