//! Choropleth styling for district polygons.
//!
//! A feature is joined to a [`ThematicTable`] entry through its properties, then
//! colored either by its dominant category or by the share of one selected category.
//! Percentage shading keeps the hue of the category's group and encodes the share as
//! lightness.

use crate::categories::{CategoryGroup, CategoryTable};
use crate::layers::VisibleLayers;
use crate::normalize::{id_text, JsonObject};
use crate::types::{AreaThematic, AreaValues, CategoryCode, ThematicTable};
use serde::Serialize;
use tracing::{debug, warn};

/// Fill used when a feature has no matching thematic data.
pub const NO_DATA_FILL: &str = "#f0f0f0";
/// Fill used when the matched area reports a zero total.
pub const EMPTY_DATA_FILL: &str = "#f5f5f5";
/// Fill used before any thematic data has been loaded.
pub const NO_TABLE_FILL: &str = "#e0e0e0";

/// Feature properties tried when joining a polygon to the thematic table.
pub const FEATURE_AREA_KEYS: [&str; 5] = ["id", "osm_id", "code", "districtCode", "district_code"];

const SATURATION: f64 = 0.6;
const LIGHTEST: f64 = 0.9;
const DARKEST: f64 = 0.35;
const LIGHTNESS_SPAN: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Dominant,
    ByCategory(CategoryCode),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
    pub dash_pattern: Option<String>,
}

impl PathStyle {
    pub fn no_table() -> Self {
        Self {
            fill_color: NO_TABLE_FILL.to_string(),
            stroke_color: "#000000".to_string(),
            stroke_weight: 3.5,
            fill_opacity: 0.4,
            stroke_opacity: 0.9,
            dash_pattern: Some("5, 5".to_string()),
        }
    }

    pub fn no_data() -> Self {
        Self::muted(NO_DATA_FILL)
    }

    pub fn empty_data() -> Self {
        Self::muted(EMPTY_DATA_FILL)
    }

    fn muted(fill: &str) -> Self {
        Self {
            fill_color: fill.to_string(),
            stroke_color: "#333333".to_string(),
            stroke_weight: 3.0,
            fill_opacity: 0.3,
            stroke_opacity: 0.8,
            dash_pattern: Some("3, 5".to_string()),
        }
    }

    fn filled(fill: String, fill_opacity: f64) -> Self {
        Self {
            fill_color: fill,
            stroke_color: "#222222".to_string(),
            stroke_weight: 3.0,
            fill_opacity,
            stroke_opacity: 0.9,
            dash_pattern: None,
        }
    }
}

/// How a feature was joined to the thematic table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaMatch<'t> {
    Direct(&'t str, &'t AreaThematic),
    /// No id matched, but the table holds a single area which was used instead.
    SingleEntryFallback(&'t str, &'t AreaThematic),
    Unresolved,
}

impl<'t> AreaMatch<'t> {
    pub fn area(&self) -> Option<&'t AreaThematic> {
        match self {
            AreaMatch::Direct(_, area) | AreaMatch::SingleEntryFallback(_, area) => Some(area),
            AreaMatch::Unresolved => None,
        }
    }

    pub fn id(&self) -> Option<&'t str> {
        match self {
            AreaMatch::Direct(id, _) | AreaMatch::SingleEntryFallback(id, _) => Some(id),
            AreaMatch::Unresolved => None,
        }
    }
}

/// Joins a feature to its thematic entry.
///
/// Property keys from [`FEATURE_AREA_KEYS`] are tried in order, then `selected_area`.
/// When nothing matches and the table holds exactly one area, that area is used and the
/// fallback is logged.
pub fn resolve_area<'t>(
    props: Option<&JsonObject>,
    table: &'t ThematicTable,
    selected_area: Option<&str>,
) -> AreaMatch<'t> {
    let mut candidates: Vec<String> = props
        .map(|props| {
            FEATURE_AREA_KEYS
                .iter()
                .filter_map(|key| props.get(*key))
                .filter(|value| !value.is_null())
                .map(id_text)
                .filter(|id| !id.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if let Some(selected) = selected_area {
        candidates.push(selected.to_string());
    }

    for candidate in &candidates {
        if let Some((id, area)) = table.get_entry(candidate) {
            return AreaMatch::Direct(id.as_str(), area);
        }
    }

    match table.single_entry() {
        Some((id, area)) => {
            if candidates.is_empty() {
                debug!("Feature has no area id, using lone thematic entry {}", id);
            } else {
                warn!(
                    "Feature ids {:?} not found in thematic table, using lone entry {}",
                    candidates, id
                );
            }
            AreaMatch::SingleEntryFallback(id.as_str(), area)
        }
        None => {
            debug!("Feature ids {:?} unresolved against {} areas", candidates, table.len());
            AreaMatch::Unresolved
        }
    }
}

/// Largest visible category, ties going to the lower code. `None` when nothing visible
/// is strictly positive.
pub fn dominant_category(values: &AreaValues, visible: Option<&VisibleLayers>) -> Option<CategoryCode> {
    let mut best: Option<(CategoryCode, f64)> = None;
    for (code, value) in values.iter() {
        if visible.is_some_and(|layers| !layers.is_visible(code)) {
            continue;
        }
        let current_max = best.map_or(0.0, |(_, v)| v);
        if value > current_max {
            best = Some((code, value));
        }
    }
    best.map(|(code, _)| code)
}

/// Share of `code` in the area's total, clamped to `[0, 1]`. Zero when the total is not
/// positive.
pub fn category_share(area: &AreaThematic, code: CategoryCode) -> f64 {
    let total = area.total();
    if total <= 0.0 {
        return 0.0;
    }
    (area.values.get(code) / total).clamp(0.0, 1.0)
}

/// Lightness for a share: 0.9 at 0%, darkening linearly, never below 0.35.
pub fn lightness_for(pct: f64) -> f64 {
    let clamped = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 1.0) };
    (LIGHTEST - clamped * LIGHTNESS_SPAN).max(DARKEST)
}

/// Percentage color within the hue family of `group`.
pub fn color_for_percent(pct: f64, group: CategoryGroup) -> String {
    hsl_to_hex(group.hue_degrees() / 360.0, SATURATION, lightness_for(pct))
}

/// HSL (all components in `[0, 1]`) to a lowercase `#rrggbb` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Everything besides the feature that affects its style.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleContext<'a> {
    pub table: Option<&'a ThematicTable>,
    pub visible: Option<&'a VisibleLayers>,
    pub selected_area: Option<&'a str>,
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleKind {
    NoTable,
    Unresolved,
    /// Matched, but nothing visible is positive.
    NoData,
    /// Matched, but the area's total is zero.
    EmptyTotal,
    Dominant(CategoryCode),
    Percentage { category: CategoryCode, pct: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Styled {
    pub style: PathStyle,
    pub kind: StyleKind,
    pub area_id: Option<String>,
}

pub struct StyleResolver<'c> {
    categories: &'c CategoryTable,
}

impl<'c> StyleResolver<'c> {
    pub fn new(categories: &'c CategoryTable) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'c CategoryTable {
        self.categories
    }

    pub fn style_for(&self, props: Option<&JsonObject>, ctx: &StyleContext<'_>) -> PathStyle {
        self.resolve(props, ctx).style
    }

    pub fn resolve(&self, props: Option<&JsonObject>, ctx: &StyleContext<'_>) -> Styled {
        let Some(table) = ctx.table else {
            return Styled {
                style: PathStyle::no_table(),
                kind: StyleKind::NoTable,
                area_id: None,
            };
        };

        let matched = resolve_area(props, table, ctx.selected_area);
        let area_id = matched.id().map(str::to_string);
        let Some(area) = matched.area() else {
            return Styled {
                style: PathStyle::no_data(),
                kind: StyleKind::Unresolved,
                area_id,
            };
        };

        let (style, kind) = match ctx.mode {
            DisplayMode::ByCategory(category) => {
                if area.total() <= 0.0 {
                    (PathStyle::empty_data(), StyleKind::EmptyTotal)
                } else {
                    let pct = category_share(area, category);
                    let group = self.categories.get(category).group;
                    (
                        PathStyle::filled(color_for_percent(pct, group), 0.75),
                        StyleKind::Percentage { category, pct },
                    )
                }
            }
            DisplayMode::Dominant => match dominant_category(&area.values, ctx.visible) {
                Some(code) => (
                    PathStyle::filled(self.categories.get(code).color.clone(), 0.7),
                    StyleKind::Dominant(code),
                ),
                None => (PathStyle::no_data(), StyleKind::NoData),
            },
        };

        Styled { style, kind, area_id }
    }
}
