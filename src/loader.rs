//! Loads everything needed to draw one catalog district: its boundary polygon and its
//! LULC statistics, fetched concurrently.

use crate::choropleth::style_collection;
use crate::data;
use crate::districts::{find_by_code, District};
use crate::layers::VisibleLayers;
use crate::style::{DisplayMode, StyleContext, StyleResolver};
use crate::types::ThematicTable;
use crate::upstream::UpstreamClient;
use geojson::FeatureCollection;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "path")]
pub enum BoundarySource {
    Osm,
    Local(PathBuf),
}

#[derive(Debug, Clone)]
pub struct DistrictData {
    pub district: District,
    pub boundaries: FeatureCollection,
    pub boundary_source: BoundarySource,
    pub thematic: ThematicTable,
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("unknown district code: {0}")]
    UnknownDistrict(String),
    #[error("no boundary available for district {code}: {reason}")]
    Boundary { code: String, reason: String },
}

/// Fetches the polygon (by name) and statistics (by code) of a catalog district.
///
/// A failed or empty OSM lookup falls back to `district_<code>.json` in `boundary_dir`.
/// A failed statistics fetch is logged and yields an empty table, so the district is
/// still drawn in the no-data style.
pub async fn load_district(
    client: &UpstreamClient,
    code: &str,
    boundary_dir: Option<&Path>,
) -> Result<DistrictData, LoadError> {
    let district = *find_by_code(code).ok_or_else(|| LoadError::UnknownDistrict(code.trim().to_string()))?;
    info!("Loading district {} ({})", district.name, district.code);

    let (polygon, thematic) = tokio::join!(
        client.search_district(district.name),
        client.fetch_thematic(district.code, None),
    );

    let thematic = thematic.unwrap_or_else(|e| {
        warn!("LULC fetch for {} failed: {}", district.code, e);
        ThematicTable::new()
    });

    let (boundaries, boundary_source) = match polygon {
        Ok(Some(found)) => (found, BoundarySource::Osm),
        Ok(None) => local_boundaries(&district, boundary_dir)?,
        Err(e) => {
            warn!("OSM lookup for {} failed: {}", district.name, e);
            local_boundaries(&district, boundary_dir)?
        }
    };

    Ok(DistrictData {
        district,
        boundaries,
        boundary_source,
        thematic,
    })
}

fn local_boundaries(
    district: &District,
    boundary_dir: Option<&Path>,
) -> Result<(FeatureCollection, BoundarySource), LoadError> {
    let Some(dir) = boundary_dir else {
        return Err(LoadError::Boundary {
            code: district.code.to_string(),
            reason: "OSM lookup failed and no boundary_dir is configured".to_string(),
        });
    };

    let path = dir.join(format!("district_{}.json", district.code));
    info!("Falling back to local boundary file {:?}", path);
    let collection = data::load_boundaries(&path).map_err(|e| LoadError::Boundary {
        code: district.code.to_string(),
        reason: format!("{:#}", e),
    })?;
    Ok((collection, BoundarySource::Local(path)))
}

impl DistrictData {
    /// Styles the district boundary, using the district code as the join hint.
    pub fn style(
        &self,
        resolver: &StyleResolver<'_>,
        mode: DisplayMode,
        visible: Option<&VisibleLayers>,
    ) -> FeatureCollection {
        let ctx = StyleContext {
            table: Some(&self.thematic),
            visible,
            selected_area: Some(self.district.code),
            mode,
        };
        style_collection(&self.boundaries, resolver, &ctx)
    }
}
