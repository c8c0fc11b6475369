use crate::normalize::{normalize_str, JsonObject};
use crate::types::ThematicTable;
use anyhow::{anyhow, Context, Result};
use geo::MultiPolygon;
use geojson::{Feature, FeatureCollection, GeoJson};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Reads a raw LULC statistics file and normalizes it. Unusable content gives an empty
/// table rather than an error; only IO failures are reported.
pub fn load_thematic(path: &Path) -> Result<ThematicTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read thematic file: {:?}", path))?;
    let table = normalize_str(&content);
    info!("Loaded thematic data for {} areas from {:?}", table.len(), path);
    Ok(table)
}

/// Loads district boundaries. A single Feature is wrapped into a collection.
pub fn load_boundaries(path: &Path) -> Result<FeatureCollection> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to open GeoJSON file: {:?}", path))?;
    let geojson: GeoJson = content.parse().context("Failed to parse GeoJSON")?;
    let collection = into_collection(geojson)?;
    info!("Loaded {} boundary features from {:?}", collection.features.len(), path);
    Ok(collection)
}

pub fn into_collection(geojson: GeoJson) -> Result<FeatureCollection> {
    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(feature) => Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }),
        GeoJson::Geometry(_) => Err(anyhow!("Boundaries must be a Feature or FeatureCollection")),
    }
}

/// Polygonal geometry of a feature, or `None` for points, lines and missing geometry.
pub fn feature_polygon(feature: &Feature) -> Option<MultiPolygon<f64>> {
    let geometry = feature.geometry.as_ref()?;
    let converted: geo::Geometry<f64> = match geometry.value.clone().try_into() {
        Ok(g) => g,
        Err(e) => {
            warn!("Failed to convert geojson geometry: {:?}", e);
            return None;
        }
    };

    match converted {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon::new(vec![p])),
        _ => None, // Skip points/lines
    }
}

/// Picks the administrative boundary out of a Nominatim search result, falling back to
/// the first feature.
pub fn select_district_feature(results: FeatureCollection) -> Option<FeatureCollection> {
    let is_boundary = |props: &JsonObject| {
        props.get("type").and_then(|v| v.as_str()) == Some("administrative")
            || props.get("class").and_then(|v| v.as_str()) == Some("boundary")
    };

    let mut features = results.features;
    let position = features
        .iter()
        .position(|f| f.properties.as_ref().is_some_and(is_boundary))
        .unwrap_or(0);
    if features.is_empty() {
        return None;
    }
    let chosen = features.swap_remove(position);
    Some(FeatureCollection {
        bbox: None,
        features: vec![chosen],
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryCode;
    use serde_json::json;

    fn square_feature(props: serde_json::Value) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": props,
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
            }
        })
    }

    #[test]
    fn loads_thematic_file_in_any_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lulc.json");
        fs::write(&path, r#"{"district_code": "1028", "L01": "100"}"#).unwrap();
        let table = load_thematic(&path).unwrap();
        let l01 = CategoryCode::new(1).unwrap();
        assert_eq!(table.get("1028").unwrap().values.get(l01), 100.0);

        fs::write(&path, "<html>upstream error</html>").unwrap();
        assert!(load_thematic(&path).unwrap().is_empty());

        assert!(load_thematic(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn single_feature_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("district.geojson");
        fs::write(&path, square_feature(json!({"code": "77"})).to_string()).unwrap();
        let collection = load_boundaries(&path).unwrap();
        assert_eq!(collection.features.len(), 1);
        assert!(feature_polygon(&collection.features[0]).is_some());
    }

    #[test]
    fn bare_geometry_is_rejected() {
        let geojson: GeoJson = json!({"type": "Point", "coordinates": [1.0, 2.0]})
            .to_string()
            .parse()
            .unwrap();
        assert!(into_collection(geojson).is_err());
    }

    #[test]
    fn non_polygon_features_have_no_polygon() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        }))
        .unwrap();
        assert!(feature_polygon(&feature).is_none());

        let bare: Feature = serde_json::from_value(json!({
            "type": "Feature", "properties": {}, "geometry": null
        }))
        .unwrap();
        assert!(feature_polygon(&bare).is_none());
    }

    #[test]
    fn nominatim_prefers_administrative_boundary() {
        let results: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                square_feature(json!({"type": "city", "name": "first"})),
                square_feature(json!({"type": "administrative", "name": "district"}))
            ]
        }))
        .unwrap();
        let chosen = select_district_feature(results).unwrap();
        assert_eq!(chosen.features.len(), 1);
        let props = chosen.features[0].properties.as_ref().unwrap();
        assert_eq!(props["name"], "district");

        let empty = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        assert!(select_district_feature(empty).is_none());
    }

    #[test]
    fn nominatim_falls_back_to_first() {
        let results: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                square_feature(json!({"type": "city", "name": "first"})),
                square_feature(json!({"type": "town", "name": "second"}))
            ]
        }))
        .unwrap();
        let chosen = select_district_feature(results).unwrap();
        assert_eq!(chosen.features[0].properties.as_ref().unwrap()["name"], "first");
    }
}
