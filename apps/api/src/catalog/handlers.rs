use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::CareerRecord;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RelatedCareer {
    pub id: String,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct CareerDetailResponse {
    pub career: CareerRecord,
    pub growth: String,
    pub related: Vec<RelatedCareer>,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub categories: Vec<String>,
    pub interests: Vec<String>,
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerDetailResponse>, AppError> {
    let career = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;

    let related = state
        .catalog
        .related(&id)
        .into_iter()
        .map(|r| RelatedCareer {
            id: r.id.clone(),
            title: r.title.clone(),
            category: r.category.clone(),
        })
        .collect();

    let is_favorite = state.favorites.lock().await.is_favorite(&id);

    Ok(Json(CareerDetailResponse {
        career: career.clone(),
        growth: career.growth_descriptor().to_string(),
        related,
        is_favorite,
    }))
}

/// GET /api/v1/vocabulary
///
/// Allowed-value hints for the browse filters. Not enforced by the filter itself.
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        categories: state.catalog.categories().to_vec(),
        interests: state.catalog.interest_tags().to_vec(),
    })
}
