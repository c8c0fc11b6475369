use crate::categories::{CategoryGroup, CategoryTable, SchemaVersion};
use crate::layers::VisibleLayers;
use crate::style::DisplayMode;
use crate::types::CategoryCode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TaxonomyConfig {
    #[serde(default)]
    pub version: SchemaVersion,
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    pub code: String,
    pub name: String,
    pub color: String, // Hex code
    pub group: CategoryGroup,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputConfig {
    pub thematic: Option<PathBuf>,
    pub boundaries: Option<PathBuf>,
    /// District the thematic file belongs to; used as an extra join key.
    pub district: Option<String>,
    /// Directory of `district_<code>.json` boundaries used when the OSM lookup fails.
    pub boundary_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModeName {
    #[default]
    Dominant,
    ByCategory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    #[serde(default)]
    pub mode: ModeName,
    #[serde(default = "default_category")]
    pub category: CategoryCode,
    #[serde(default)]
    pub hidden: Vec<CategoryCode>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mode: ModeName::default(),
            category: default_category(),
            hidden: Vec::new(),
        }
    }
}

fn default_category() -> CategoryCode {
    CategoryCode::CROP_LAND
}

impl StyleConfig {
    pub fn display_mode(&self) -> DisplayMode {
        match self.mode {
            ModeName::Dominant => DisplayMode::Dominant,
            ModeName::ByCategory => DisplayMode::ByCategory(self.category),
        }
    }

    pub fn visible_layers(&self) -> VisibleLayers {
        let mut layers = VisibleLayers::all();
        for code in &self.hidden {
            layers.set(*code, false);
        }
        layers
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    #[serde(default = "default_lulc_url")]
    pub lulc_url: String,
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    #[serde(default = "default_year")]
    pub year: String,
    /// Environment variable holding the LULC API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            lulc_url: default_lulc_url(),
            nominatim_url: default_nominatim_url(),
            year: default_year(),
            token_env: default_token_env(),
        }
    }
}

fn default_lulc_url() -> String {
    "https://bhuvan-app1.nrsc.gov.in/api/lulc/curl_aoi.php".to_string()
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_year() -> String {
    "1112".to_string()
}

fn default_token_env() -> String {
    "LULC_API_TOKEN".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: None,
        }
    }
}

fn default_port() -> u16 {
    5000
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)
            .with_context(|| "Failed to parse TOML configuration")?;
        Ok(config)
    }

    /// Loads the config if the file exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {:?}, using defaults", path);
            Self::from_toml("")
        }
    }

    /// Resolves the configured taxonomy into a category table.
    pub fn category_table(&self) -> Result<CategoryTable> {
        let table = match self.taxonomy.version {
            SchemaVersion::V2 => CategoryTable::v2(),
            SchemaVersion::V1Legacy => CategoryTable::v1_legacy(),
            SchemaVersion::Custom => CategoryTable::from_config(&self.taxonomy.categories)
                .context("Invalid [[taxonomy.categories]] in configuration")?,
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.upstream.year, "1112");
        assert_eq!(config.style.display_mode(), DisplayMode::Dominant);
        assert_eq!(config.category_table().unwrap().schema_version, SchemaVersion::V2);
    }

    #[test]
    fn parses_full_config() {
        let config = AppConfig::from_toml(
            r#"
            [taxonomy]
            version = "v1-legacy"

            [input]
            thematic = "data/lulc.json"
            boundaries = "data/district.geojson"
            district = "1028"
            boundary_dir = "geojson"

            [style]
            mode = "by-category"
            category = "l09"
            hidden = ["l24", "L01"]

            [server]
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.input.district.as_deref(), Some("1028"));
        assert_eq!(config.input.boundary_dir, Some(PathBuf::from("geojson")));
        let l09 = CategoryCode::new(9).unwrap();
        assert_eq!(config.style.display_mode(), DisplayMode::ByCategory(l09));
        let layers = config.style.visible_layers();
        assert!(!layers.is_visible(CategoryCode::new(24).unwrap()));
        assert!(!layers.is_visible(CategoryCode::new(1).unwrap()));
        assert!(layers.is_visible(l09));
        assert_eq!(
            config.category_table().unwrap().schema_version,
            SchemaVersion::V1Legacy
        );
    }

    #[test]
    fn custom_taxonomy_without_categories_fails() {
        let config = AppConfig::from_toml("[taxonomy]\nversion = \"custom\"\n").unwrap();
        assert!(config.category_table().is_err());
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 9000\n").unwrap();
        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.server.port, 9000);

        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load_from_file(&missing).is_err());
        assert_eq!(AppConfig::load_or_default(&missing).unwrap().server.port, 5000);
    }
}
