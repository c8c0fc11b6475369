use crate::categories::CategoryTable;
use crate::choropleth::style_collection;
use crate::config::{AppConfig, ModeName};
use crate::data::into_collection;
use crate::districts::{self, District};
use crate::layers::VisibleLayers;
use crate::loader::{load_district, BoundarySource, LoadError};
use crate::locate::AreaLocator;
use crate::normalize::{normalize, normalize_str};
use crate::style::{resolve_area, DisplayMode, StyleContext, StyleResolver};
use crate::summary::{CategoryShare, Legend, Popup};
use crate::types::{CategoryCode, ThematicTable};
use crate::upstream::{UpstreamClient, UpstreamError};
use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use geojson::{FeatureCollection, GeoJson};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info};

pub struct AppState {
    pub categories: CategoryTable,
    pub upstream: UpstreamClient,
    /// Thematic data and boundaries preloaded from `[input]`, used by `/api/query` and
    /// `/api/legend`.
    pub thematic: Option<ThematicTable>,
    pub locator: Option<AreaLocator>,
    pub config: AppConfig,
}

#[derive(Debug, Serialize)]
struct ApiError {
    code: &'static str,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            AppError::Load(LoadError::UnknownDistrict(_)) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Load(LoadError::Boundary { .. }) => (StatusCode::BAD_GATEWAY, "BOUNDARY_UNAVAILABLE"),
        };
        if status.is_server_error() {
            error!("{}", self);
        }
        let body = ApiError {
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
pub struct LulcParams {
    distcode: String,
    year: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    q: String,
}

#[derive(Deserialize)]
pub struct QueryParams {
    lat: f64,
    lon: f64,
}

#[derive(Serialize)]
pub struct QueryResponse {
    id: Option<String>,
    name: String,
    top: Vec<CategoryShare>,
}

#[derive(Deserialize)]
pub struct StyleRequest {
    /// Raw LULC payload in any supported shape, including a serialized table.
    thematic: Value,
    boundaries: Value,
    #[serde(default)]
    mode: ModeName,
    category: Option<CategoryCode>,
    #[serde(default)]
    hidden: Vec<CategoryCode>,
    selected_area: Option<String>,
}

#[derive(Deserialize)]
pub struct DistrictListParams {
    q: Option<String>,
}

#[derive(Deserialize)]
pub struct DistrictParams {
    mode: Option<ModeName>,
    category: Option<CategoryCode>,
}

#[derive(Serialize)]
pub struct DistrictResponse {
    district: District,
    boundary_source: BoundarySource,
    thematic: ThematicTable,
    choropleth: FeatureCollection,
}

pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    let app = Router::new()
        .route("/api/lulc", get(lulc_handler))
        .route("/api/osm/search", get(osm_search_handler))
        .route("/api/normalize", post(normalize_handler))
        .route("/api/style", post(style_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/legend", get(legend_handler))
        .route("/api/query", get(query_handler))
        .route("/api/districts", get(districts_handler))
        .route("/api/district/:code", get(district_handler));

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(CorsLayer::permissive()).with_state(state)
}

pub async fn start_server(config: AppConfig, categories: CategoryTable, thematic: Option<ThematicTable>, boundaries: Option<FeatureCollection>) -> Result<()> {
    let locator = boundaries.as_ref().map(AreaLocator::new);
    let upstream = UpstreamClient::new(config.upstream.clone())?;

    let state = Arc::new(AppState {
        categories,
        upstream,
        thematic,
        locator,
        config: config.clone(),
    });

    let port = config.server.port;
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    info!("Starting server on http://{}", addr);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn lulc_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LulcParams>,
) -> Result<Json<ThematicTable>, AppError> {
    if params.distcode.trim().is_empty() {
        return Err(AppError::BadRequest("distcode is required".to_string()));
    }
    let table = state
        .upstream
        .fetch_thematic(params.distcode.trim(), params.year.as_deref())
        .await?;
    Ok(Json(table))
}

async fn osm_search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Option<FeatureCollection>>, AppError> {
    if params.q.trim().is_empty() {
        return Err(AppError::BadRequest("q is required".to_string()));
    }
    let found = state.upstream.search_district(params.q.trim()).await?;
    Ok(Json(found))
}

// Accepts any body; non-JSON text normalizes to an empty table.
async fn normalize_handler(body: String) -> Json<ThematicTable> {
    Json(normalize_str(&body))
}

async fn style_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StyleRequest>,
) -> Result<Json<FeatureCollection>, AppError> {
    let geojson = GeoJson::from_json_value(req.boundaries)
        .map_err(|e| AppError::BadRequest(format!("invalid boundaries: {e}")))?;
    let boundaries = into_collection(geojson).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mode = display_mode(req.mode, req.category)?;
    let mut visible = VisibleLayers::all();
    for code in &req.hidden {
        visible.set(*code, false);
    }

    let table = normalize(&req.thematic);
    let resolver = StyleResolver::new(&state.categories);
    let ctx = StyleContext {
        table: Some(&table),
        visible: Some(&visible),
        selected_area: req.selected_area.as_deref(),
        mode,
    };
    Ok(Json(style_collection(&boundaries, &resolver, &ctx)))
}

fn display_mode(mode: ModeName, category: Option<CategoryCode>) -> Result<DisplayMode, AppError> {
    match mode {
        ModeName::Dominant => Ok(DisplayMode::Dominant),
        ModeName::ByCategory => category.map(DisplayMode::ByCategory).ok_or_else(|| {
            AppError::BadRequest("category is required for by-category mode".to_string())
        }),
    }
}

async fn categories_handler(State(state): State<Arc<AppState>>) -> Json<CategoryTable> {
    Json(state.categories.clone())
}

async fn legend_handler(State(state): State<Arc<AppState>>) -> Result<Json<Legend>, AppError> {
    let table = state
        .thematic
        .as_ref()
        .ok_or_else(|| AppError::NotFound("no thematic data loaded".to_string()))?;
    let visible = state.config.style.visible_layers();
    Ok(Json(Legend::build(&state.categories, table, Some(&visible))))
}

async fn query_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Option<QueryResponse>>, AppError> {
    let (Some(locator), Some(table)) = (state.locator.as_ref(), state.thematic.as_ref()) else {
        return Err(AppError::NotFound("no boundaries or thematic data loaded".to_string()));
    };

    let Some(boundary) = locator.locate(params.lat, params.lon) else {
        return Ok(Json(None));
    };

    let matched = resolve_area(
        Some(&boundary.properties),
        table,
        state.config.input.district.as_deref(),
    );
    let display_name = ["name", "district_name", "title"]
        .iter()
        .find_map(|key| boundary.properties.get(*key).and_then(Value::as_str));
    let Popup { title, area_id, rows } =
        Popup::build(matched.id(), matched.area(), display_name, &state.categories);

    Ok(Json(Some(QueryResponse {
        id: area_id,
        name: title,
        top: rows,
    })))
}

async fn districts_handler(Query(params): Query<DistrictListParams>) -> Json<Vec<District>> {
    let listed = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => districts::find_by_name(q).copied().collect(),
        _ => districts::DISTRICTS.to_vec(),
    };
    Json(listed)
}

// Mode and category default to the configured [style]; hidden layers always come from it.
async fn district_handler(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Query(params): Query<DistrictParams>,
) -> Result<Json<DistrictResponse>, AppError> {
    let style = &state.config.style;
    let mode = display_mode(
        params.mode.unwrap_or(style.mode),
        params.category.or(Some(style.category)),
    )?;
    let visible = style.visible_layers();

    let loaded = load_district(&state.upstream, &code, state.config.input.boundary_dir.as_deref()).await?;
    let resolver = StyleResolver::new(&state.categories);
    let choropleth = loaded.style(&resolver, mode, Some(&visible));

    Ok(Json(DistrictResponse {
        district: loaded.district,
        boundary_source: loaded.boundary_source,
        thematic: loaded.thematic,
        choropleth,
    }))
}
