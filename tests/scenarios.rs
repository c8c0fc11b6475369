use lulc_map::categories::CategoryTable;
use lulc_map::choropleth::style_collection;
use lulc_map::config::AppConfig;
use lulc_map::data;
use lulc_map::normalize::{normalize, normalize_str};
use lulc_map::style::{DisplayMode, StyleContext, StyleKind, StyleResolver};
use lulc_map::types::CategoryCode;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn l(n: u8) -> CategoryCode {
    CategoryCode::new(n).unwrap()
}

fn district(props: Value, x: f64) -> Value {
    json!({
        "type": "Feature",
        "properties": props,
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 1.0], [x, 0.0]]]
        }
    })
}

#[test]
fn flat_object_styles_with_dominant_color() {
    let dir = tempdir().unwrap();
    let thematic = dir.path().join("lulc.json");
    let boundaries = dir.path().join("districts.geojson");
    fs::write(
        &thematic,
        json!({"district_code": "1028", "L01": "100", "L04": "50", "totalarea": "150"}).to_string(),
    )
    .unwrap();
    fs::write(
        &boundaries,
        json!({"type": "FeatureCollection", "features": [district(json!({"code": "1028"}), 0.0)]})
            .to_string(),
    )
    .unwrap();

    let table = data::load_thematic(&thematic).unwrap();
    let area = table.get("1028").unwrap();
    assert_eq!(area.values.get(l(1)), 100.0);
    assert_eq!(area.values.get(l(4)), 50.0);
    assert_eq!(area.total_area, Some(150.0));

    let categories = CategoryTable::v2();
    let resolver = StyleResolver::new(&categories);
    let ctx = StyleContext {
        table: Some(&table),
        ..Default::default()
    };
    let styled = style_collection(&data::load_boundaries(&boundaries).unwrap(), &resolver, &ctx);

    let props = styled.features[0].properties.as_ref().unwrap();
    assert_eq!(props["fill"], json!("#FF0000"));
    assert_eq!(props["lulc-dominant"], json!("l01"));
    assert_eq!(props["lulc-area"], json!("1028"));
}

#[test]
fn feature_collection_in_by_category_mode_reaches_darkest_shade() {
    let raw = json!({
        "type": "FeatureCollection",
        "features": [{"type": "Feature", "properties": {"code": "77", "l09": "40"}, "geometry": null}]
    });
    let table = normalize(&raw);
    assert_eq!(table.get("77").unwrap().values.get(l(9)), 40.0);

    let categories = CategoryTable::v2();
    let resolver = StyleResolver::new(&categories);
    let ctx = StyleContext {
        table: Some(&table),
        mode: DisplayMode::ByCategory(l(9)),
        ..Default::default()
    };
    let boundaries: geojson::FeatureCollection = serde_json::from_value(
        json!({"type": "FeatureCollection", "features": [district(json!({"code": "77"}), 0.0)]}),
    )
    .unwrap();
    let styled = style_collection(&boundaries, &resolver, &ctx);

    let props = styled.features[0].properties.as_ref().unwrap();
    assert_eq!(props["fill"], json!("#248f24"));
    assert_eq!(props["lulc-category"], json!("l09"));
    assert_eq!(props["lulc-percent"], json!(100.0));
}

#[test]
fn malformed_text_gives_empty_table_and_no_table_style_stays_distinct() {
    let table = normalize_str("{not json");
    assert!(table.is_empty());

    let categories = CategoryTable::v2();
    let resolver = StyleResolver::new(&categories);
    let props = json!({"code": "1"}).as_object().cloned();

    let missing = resolver.resolve(props.as_ref(), &StyleContext::default());
    let empty = resolver.resolve(
        props.as_ref(),
        &StyleContext {
            table: Some(&table),
            ..Default::default()
        },
    );
    assert_eq!(missing.kind, StyleKind::NoTable);
    assert_eq!(empty.kind, StyleKind::Unresolved);
    assert_ne!(missing.style.fill_color, empty.style.fill_color);
}

#[test]
fn tied_areas_both_pick_lower_code() {
    let table = normalize(&json!([
        {"code": "A", "l01": 50, "l04": 50},
        {"code": "B", "L04": "50", "L01": "50"}
    ]));
    let categories = CategoryTable::v2();
    let resolver = StyleResolver::new(&categories);
    let ctx = StyleContext {
        table: Some(&table),
        ..Default::default()
    };

    for id in ["A", "B"] {
        let props = json!({"code": id}).as_object().cloned();
        let styled = resolver.resolve(props.as_ref(), &ctx);
        assert_eq!(styled.kind, StyleKind::Dominant(l(1)), "area {id}");
    }
}

#[test]
fn multi_area_output_keeps_feature_order_and_drops_points() {
    let table = normalize(&json!([
        {"code": "1", "l08": 10},
        {"code": "2", "l22": 10},
        {"code": "3", "l13": 10}
    ]));
    let boundaries: geojson::FeatureCollection = serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [
            district(json!({"code": "3"}), 2.0),
            {"type": "Feature", "properties": {"code": "1"}, "geometry": {"type": "Point", "coordinates": [0.5, 0.5]}},
            district(json!({"code": "1"}), 0.0),
            district(json!({"code": "2"}), 1.0)
        ]
    }))
    .unwrap();

    let categories = CategoryTable::v2();
    let resolver = StyleResolver::new(&categories);
    let ctx = StyleContext {
        table: Some(&table),
        ..Default::default()
    };
    let styled = style_collection(&boundaries, &resolver, &ctx);

    let fills: Vec<&Value> = styled
        .features
        .iter()
        .map(|f| &f.properties.as_ref().unwrap()["fill"])
        .collect();
    assert_eq!(fills, [&json!("#98FB98"), &json!("#006400"), &json!("#1E90FF")]);
}

#[test]
fn legacy_taxonomy_from_config_recolors_reserved_slots() {
    let config = AppConfig::from_toml("[taxonomy]\nversion = \"v1-legacy\"\n").unwrap();
    let categories = config.category_table().unwrap();
    let table = normalize(&json!({"code": "9", "l22": 30, "l04": 10}));
    let resolver = StyleResolver::new(&categories);
    let ctx = StyleContext {
        table: Some(&table),
        ..Default::default()
    };

    let props = json!({"code": "9"}).as_object().cloned();
    let style = resolver.style_for(props.as_ref(), &ctx);
    assert_eq!(style.fill_color, "#BDBDBD");
}
