use crate::categories::{Category, CategoryGroup, CategoryTable};
use crate::layers::VisibleLayers;
use crate::types::{AreaThematic, CategoryCode, ThematicTable};
use serde::Serialize;
use std::collections::BTreeSet;

pub const POPUP_ROWS: usize = 5;

/// One popup row: a category and its share of the area total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub code: CategoryCode,
    pub name: String,
    pub color: String,
    pub value: f64,
    /// Percentage of the area total, 0..=100 for consistent totals.
    pub percent: f64,
}

/// The `limit` largest non-zero categories, value descending, ties in code order.
pub fn top_categories(area: &AreaThematic, categories: &CategoryTable, limit: usize) -> Vec<CategoryShare> {
    let total = area.total();
    let mut rows: Vec<(CategoryCode, f64)> = area.values.iter().filter(|(_, v)| *v > 0.0).collect();
    // stable sort keeps code order among equal values
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    rows.truncate(limit);

    rows.into_iter()
        .map(|(code, value)| {
            let category = categories.get(code);
            CategoryShare {
                code,
                name: category.name.clone(),
                color: category.color.clone(),
                value,
                percent: if total > 0.0 { value / total * 100.0 } else { 0.0 },
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub area_id: Option<String>,
    pub rows: Vec<CategoryShare>,
}

impl Popup {
    /// Title falls back from the caller's name to the area's own name to "Area".
    pub fn build(
        area_id: Option<&str>,
        area: Option<&AreaThematic>,
        display_name: Option<&str>,
        categories: &CategoryTable,
    ) -> Self {
        let title = display_name
            .map(str::to_string)
            .or_else(|| area.and_then(|a| a.name.clone()))
            .unwrap_or_else(|| "Area".to_string());
        let rows = area
            .map(|a| top_categories(a, categories, POPUP_ROWS))
            .unwrap_or_default();
        Self {
            title,
            area_id: area_id.map(str::to_string),
            rows,
        }
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendGroup {
    pub group: CategoryGroup,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub groups: Vec<LegendGroup>,
    /// True when nothing was present and every category is listed.
    pub showing_all: bool,
}

impl Legend {
    /// Lists categories that are visible and non-zero in some area with data.
    pub fn build(categories: &CategoryTable, table: &ThematicTable, visible: Option<&VisibleLayers>) -> Self {
        let present = present_categories(table, visible);
        let showing_all = present.is_empty();

        let groups = CategoryGroup::ALL
            .iter()
            .filter_map(|group| {
                let listed: Vec<Category> = categories
                    .in_group(*group)
                    .filter(|c| showing_all || present.contains(&c.code))
                    .cloned()
                    .collect();
                if listed.is_empty() {
                    None
                } else {
                    Some(LegendGroup {
                        group: *group,
                        categories: listed,
                    })
                }
            })
            .collect();

        Self { groups, showing_all }
    }
}

/// Codes with a positive value in any area that has data.
pub fn present_categories(table: &ThematicTable, visible: Option<&VisibleLayers>) -> BTreeSet<CategoryCode> {
    table
        .iter()
        .filter(|(_, area)| area.values.has_data())
        .flat_map(|(_, area)| area.values.iter())
        .filter(|(code, value)| *value > 0.0 && visible.map_or(true, |l| l.is_visible(*code)))
        .map(|(code, _)| code)
        .collect()
}
