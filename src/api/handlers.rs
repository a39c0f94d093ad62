use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::CategoryField;
use crate::services::DEFAULT_RECOMMENDATIONS;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub title: String,
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    DEFAULT_RECOMMENDATIONS
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub field: CategoryField,
    pub value: String,
    pub titles: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All catalog titles in store order, for populating selection widgets
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.recommender.catalog().titles())
}

/// Movies most similar to the given title
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<RecommendationResponse>> {
    let recommendations = state
        .recommender
        .recommend_similar(&params.title, params.k)?;

    Ok(Json(RecommendationResponse {
        title: params.title,
        recommendations,
    }))
}

/// Sorted distinct values of a category field, for selection options
pub async fn list_category_values(
    State(state): State<AppState>,
    Path(field): Path<CategoryField>,
) -> Json<Vec<String>> {
    Json(state.recommender.catalog().distinct_values(field))
}

/// Titles for a category value: genre listings directly, cast/crew via the
/// representative-movie ranking
pub async fn filter_by_category(
    State(state): State<AppState>,
    Path(field): Path<CategoryField>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<CategoryResponse>> {
    let titles = state.recommender.filter_by_field(field, &params.value)?;

    Ok(Json(CategoryResponse {
        field,
        value: params.value,
        titles,
    }))
}
