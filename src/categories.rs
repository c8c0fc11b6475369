//! LULC category reference tables.
//!
//! The map, legend and popup all read colors and names from a single
//! [`CategoryTable`]. Two built-in taxonomies exist and they are never merged: the
//! 24-class `v2` table and the older `v1-legacy` table whose last four slots are
//! unassigned placeholders. A custom table can be supplied through configuration.

use crate::config::CategoryConfig;
use crate::types::CategoryCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryGroup {
    #[serde(rename = "Built-up")]
    BuiltUp,
    Agriculture,
    Forest,
    #[serde(rename = "Other Natural")]
    OtherNatural,
    Wetland,
    Misc,
}

impl CategoryGroup {
    /// Display order used by legends and layer controls.
    pub const ALL: [CategoryGroup; 6] = [
        CategoryGroup::BuiltUp,
        CategoryGroup::Agriculture,
        CategoryGroup::Forest,
        CategoryGroup::OtherNatural,
        CategoryGroup::Wetland,
        CategoryGroup::Misc,
    ];

    /// Hue family used when shading by percentage.
    pub fn hue_degrees(self) -> f64 {
        match self {
            CategoryGroup::BuiltUp => 0.0,
            CategoryGroup::Agriculture => 40.0,
            CategoryGroup::Forest => 120.0,
            CategoryGroup::Wetland => 210.0,
            CategoryGroup::OtherNatural => 30.0,
            CategoryGroup::Misc => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryGroup::BuiltUp => "Built-up",
            CategoryGroup::Agriculture => "Agriculture",
            CategoryGroup::Forest => "Forest",
            CategoryGroup::OtherNatural => "Other Natural",
            CategoryGroup::Wetland => "Wetland",
            CategoryGroup::Misc => "Misc",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaVersion {
    #[default]
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v1-legacy")]
    V1Legacy,
    #[serde(rename = "custom")]
    Custom,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaVersion::V2 => "v2",
            SchemaVersion::V1Legacy => "v1-legacy",
            SchemaVersion::Custom => "custom",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub code: CategoryCode,
    pub name: String,
    pub color: String,
    pub group: CategoryGroup,
}

#[derive(Debug, Error, PartialEq)]
pub enum TaxonomyError {
    #[error("unknown category code {0:?}")]
    UnknownCode(String),
    #[error("category {0} defined more than once")]
    Duplicate(CategoryCode),
    #[error("category {0} is missing")]
    Missing(CategoryCode),
    #[error("category {code} has invalid color {color:?}, expected #RRGGBB")]
    InvalidColor { code: CategoryCode, color: String },
    #[error("custom taxonomy requested but no [[taxonomy.categories]] were given")]
    Empty,
}

/// The active set of 24 categories, indexed by code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTable {
    pub schema_version: SchemaVersion,
    categories: Vec<Category>,
}

const V2_CATEGORIES: [(&str, &str, CategoryGroup); CategoryCode::COUNT] = [
    ("Builtup, Urban", "#FF0000", CategoryGroup::BuiltUp),
    ("Builtup, Rural", "#FF5555", CategoryGroup::BuiltUp),
    ("Builtup, Mining", "#A02020", CategoryGroup::BuiltUp),
    ("Agriculture, Crop land", "#FFFF00", CategoryGroup::Agriculture),
    ("Agriculture, Plantation", "#AAFF00", CategoryGroup::Agriculture),
    ("Agriculture, Fallow", "#D2CC55", CategoryGroup::Agriculture),
    ("Agriculture, Current Shifting Cultivation", "#CCAA22", CategoryGroup::Agriculture),
    ("Forest, Evergreen/Semi evergreen", "#006400", CategoryGroup::Forest),
    ("Forest, Deciduous", "#228B22", CategoryGroup::Forest),
    ("Forest, Forest Plantation", "#77DD77", CategoryGroup::Forest),
    ("Forest, Scrub Forest", "#AADD66", CategoryGroup::Forest),
    ("Forest, Swamp/Mangroves", "#00A36C", CategoryGroup::Forest),
    ("Grass/Grazing", "#98FB98", CategoryGroup::OtherNatural),
    ("Barren/Wastelands, Salt Affected land", "#E0E0E0", CategoryGroup::OtherNatural),
    ("Barren/Wastelands, Gullied/Ravinous Land", "#D2B48C", CategoryGroup::OtherNatural),
    ("Barren/Wastelands, Scrub land", "#DEB887", CategoryGroup::OtherNatural),
    ("Barren/Wastelands, Sandy area", "#F5DEB3", CategoryGroup::OtherNatural),
    ("Barren/Wastelands, Barren rocky", "#A9A9A9", CategoryGroup::OtherNatural),
    ("Barren/Wastelands, Rann", "#C0C0C0", CategoryGroup::OtherNatural),
    ("Wetlands/Water Bodies, Inland Wetland", "#87CEEB", CategoryGroup::Wetland),
    ("Wetlands/Water Bodies, Coastal Wetland", "#00BFFF", CategoryGroup::Wetland),
    ("Wetlands/Water Bodies, River/Stream/canals", "#1E90FF", CategoryGroup::Wetland),
    ("Wetlands/Water Bodies, Reservoir/Lakes/Ponds", "#0000FF", CategoryGroup::Wetland),
    ("Snow and Glacier", "#FFFFFF", CategoryGroup::Misc),
];

const RESERVED_COLOR: &str = "#BDBDBD";
const FIRST_RESERVED_LEGACY: u8 = 21;

impl CategoryTable {
    pub fn v2() -> Self {
        let categories = CategoryCode::all()
            .zip(V2_CATEGORIES.iter())
            .map(|(code, (name, color, group))| Category {
                code,
                name: name.to_string(),
                color: color.to_string(),
                group: *group,
            })
            .collect();
        Self {
            schema_version: SchemaVersion::V2,
            categories,
        }
    }

    /// Older taxonomy: `l21`..`l24` are reserved placeholders.
    pub fn v1_legacy() -> Self {
        let mut table = Self::v2();
        table.schema_version = SchemaVersion::V1Legacy;
        for category in table.categories.iter_mut() {
            if category.code.number() >= FIRST_RESERVED_LEGACY {
                category.name = format!("Reserved ({})", category.code);
                category.color = RESERVED_COLOR.to_string();
                category.group = CategoryGroup::Misc;
            }
        }
        table
    }

    /// Builds a table from configuration entries. All 24 codes must appear exactly once.
    pub fn from_config(entries: &[CategoryConfig]) -> Result<Self, TaxonomyError> {
        if entries.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut slots: Vec<Option<Category>> = vec![None; CategoryCode::COUNT];
        let mut seen = HashSet::new();
        for entry in entries {
            let code: CategoryCode = entry
                .code
                .parse()
                .map_err(|_| TaxonomyError::UnknownCode(entry.code.clone()))?;
            if !seen.insert(code) {
                return Err(TaxonomyError::Duplicate(code));
            }
            if !is_hex_color(&entry.color) {
                return Err(TaxonomyError::InvalidColor {
                    code,
                    color: entry.color.clone(),
                });
            }
            slots[code.index()] = Some(Category {
                code,
                name: entry.name.clone(),
                color: entry.color.clone(),
                group: entry.group,
            });
        }

        let categories = CategoryCode::all()
            .zip(slots)
            .map(|(code, slot)| slot.ok_or(TaxonomyError::Missing(code)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            schema_version: SchemaVersion::Custom,
            categories,
        })
    }

    pub fn get(&self, code: CategoryCode) -> &Category {
        &self.categories[code.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Categories belonging to `group`, in code order.
    pub fn in_group(&self, group: CategoryGroup) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.group == group)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::v2()
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit())
}
