//! Hyakumi HTTP server
//!
//! Routes:
//! - `GET /v1/foods` - filtered, sorted, paginated food list
//! - `GET /v1/foods/:food_id` - single food item
//! - `GET /v1/nutrients` - nutrient tag vocabulary
//! - `GET /v1/health` - build and dataset status

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::error::ApiError;
use crate::build_info::BuildInfo;
use crate::data::Dataset;
use crate::models::{FoodItem, FoodsResponse, TagMetadata};
use crate::query::{lookup_food, parse_detail_query, parse_foods_query, run_foods_query, FoodsParams};

/// Decoded query-string pairs, repeated keys preserved
type QueryPairs = Query<Vec<(String, String)>>;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

/// Build the application router over a loaded dataset
pub fn router(dataset: Arc<Dataset>) -> Router {
    Router::new()
        .route("/v1/foods", get(list_foods))
        .route("/v1/foods/:food_id", get(get_food))
        .route("/v1/nutrients", get(list_nutrients))
        .route("/v1/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(dataset))
}

async fn list_foods(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<FoodsResponse>, ApiError> {
    let params = FoodsParams::from_pairs(pairs);
    let query = parse_foods_query(&params, state.dataset.vocabulary())?;
    debug!(?query, "Parsed foods query");
    Ok(Json(run_foods_query(&state.dataset, &query)))
}

async fn get_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
    Query(pairs): QueryPairs,
) -> Result<Json<FoodItem>, ApiError> {
    let params = FoodsParams::from_pairs(pairs);
    let query = parse_detail_query(&food_id, &params, state.dataset.vocabulary())?;
    lookup_food(&state.dataset, &query)
        .map(Json)
        .ok_or(ApiError::NotFound(food_id))
}

async fn list_nutrients(State(state): State<AppState>) -> Json<Vec<TagMetadata>> {
    Json(state.dataset.vocabulary().metadata().to_vec())
}

/// Response for `GET /v1/health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub build: BuildInfo,
    pub food_count: usize,
    pub tag_count: usize,
    pub loaded_at: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        build: BuildInfo::current(),
        food_count: state.dataset.len(),
        tag_count: state.dataset.vocabulary().len(),
        loaded_at: state.dataset.loaded_at().to_rfc3339(),
    })
}
