//! This example prints every geometry of a GeoJSON file as GML.
//!
//! Run it with the path to a `.geojson` file and, optionally, the GML version (`2.1.2` or `3.2.1`, default is
//! `3.2.1`):
//!
//! ```shell
//! cargo run --example geojson_to_gml -- ./geojson-gml/examples/data/roads.geojson 2.1.2
//! ```

use anyhow::{anyhow, Result};
use geojson::GeoJson;
use geojson_gml::{geometry_to_gml, EncodeOptions, Geometry, GmlVersion};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(file_name) = args.next() else {
        return Err(anyhow!(
            "This example must be run with the name of the .geojson file to convert"
        ));
    };
    let version = match args.next() {
        Some(v) => v.parse::<GmlVersion>()?,
        None => GmlVersion::default(),
    };

    let json = std::fs::read_to_string(&file_name)?;
    let geometries: Vec<(Option<String>, geojson::Geometry)> = match json.parse::<GeoJson>()? {
        GeoJson::Geometry(geometry) => vec![(None, geometry)],
        GeoJson::Feature(feature) => feature
            .geometry
            .map(|g| (feature_id(&feature.id), g))
            .into_iter()
            .collect(),
        GeoJson::FeatureCollection(collection) => collection
            .features
            .into_iter()
            .filter_map(|f| {
                let id = feature_id(&f.id);
                f.geometry.map(|g| (id, g))
            })
            .collect(),
    };
    log::info!(
        "Converting {} geometries from {file_name} to GML {version}",
        geometries.len()
    );

    for (id, geometry) in geometries {
        let mut options = EncodeOptions::default();
        options.gml_id = id;
        println!(
            "{}",
            geometry_to_gml(&Geometry::from(geometry), version, &options)?
        );
    }

    Ok(())
}

fn feature_id(id: &Option<geojson::feature::Id>) -> Option<String> {
    match id.as_ref()? {
        geojson::feature::Id::String(s) => Some(s.clone()),
        geojson::feature::Id::Number(n) => Some(n.to_string()),
    }
}
