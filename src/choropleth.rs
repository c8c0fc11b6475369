//! Writes resolved styles onto boundary features.
//!
//! Output properties follow the simplestyle names understood by most GeoJSON viewers
//! (`fill`, `stroke`, `stroke-width`, ...) plus `lulc-*` keys describing what the color
//! encodes.

use crate::data::feature_polygon;
use crate::normalize::JsonObject;
use crate::style::{PathStyle, StyleContext, StyleKind, StyleResolver, Styled};
use geojson::{Feature, FeatureCollection};
use rayon::prelude::*;
use serde_json::{json, Value};
use tracing::info;

/// Styles every polygonal feature. Features without polygon geometry are dropped; the
/// remaining ones keep their input order.
pub fn style_collection(
    collection: &FeatureCollection,
    resolver: &StyleResolver<'_>,
    ctx: &StyleContext<'_>,
) -> FeatureCollection {
    let features: Vec<Feature> = collection
        .features
        .par_iter()
        .filter(|feature| feature_polygon(feature).is_some())
        .map(|feature| {
            let styled = resolver.resolve(feature.properties.as_ref(), ctx);
            annotate(feature.clone(), &styled)
        })
        .collect();

    let skipped = collection.features.len() - features.len();
    info!("Styled {} features ({} skipped without polygon geometry)", features.len(), skipped);

    FeatureCollection {
        bbox: collection.bbox.clone(),
        features,
        foreign_members: collection.foreign_members.clone(),
    }
}

fn annotate(mut feature: Feature, styled: &Styled) -> Feature {
    let props = feature.properties.get_or_insert_with(JsonObject::new);
    write_style(props, &styled.style);

    match styled.kind {
        StyleKind::Dominant(code) => {
            props.insert("lulc-dominant".into(), json!(code));
        }
        StyleKind::Percentage { category, pct } => {
            props.insert("lulc-category".into(), json!(category));
            props.insert("lulc-percent".into(), json!(pct * 100.0));
        }
        _ => {}
    }
    props.insert("lulc-state".into(), json!(state_name(&styled.kind)));
    if let Some(id) = &styled.area_id {
        props.insert("lulc-area".into(), json!(id));
    }
    feature
}

fn write_style(props: &mut JsonObject, style: &PathStyle) {
    props.insert("fill".into(), json!(style.fill_color));
    props.insert("fill-opacity".into(), json!(style.fill_opacity));
    props.insert("stroke".into(), json!(style.stroke_color));
    props.insert("stroke-width".into(), json!(style.stroke_weight));
    props.insert("stroke-opacity".into(), json!(style.stroke_opacity));
    props.insert(
        "dash-array".into(),
        style.dash_pattern.as_ref().map_or(Value::Null, |d| json!(d)),
    );
}

fn state_name(kind: &StyleKind) -> &'static str {
    match kind {
        StyleKind::NoTable => "no-table",
        StyleKind::Unresolved => "unresolved",
        StyleKind::NoData => "no-data",
        StyleKind::EmptyTotal => "empty",
        StyleKind::Dominant(_) => "dominant",
        StyleKind::Percentage { .. } => "percentage",
    }
}
