use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::CareerRecord;
use crate::state::AppState;

/// One row of the favorites comparison table.
#[derive(Debug, Serialize)]
pub struct FavoriteSummary {
    pub id: String,
    pub title: String,
    pub subcategory: String,
    pub category: String,
    pub median_salary: u32,
    pub growth: String,
}

impl From<&CareerRecord> for FavoriteSummary {
    fn from(record: &CareerRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            subcategory: record.subcategory.clone(),
            category: record.category.clone(),
            median_salary: record.salary_range.median,
            growth: record.growth_descriptor().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    /// Every saved id, including ones the catalog no longer has.
    pub ids: Vec<String>,
    /// Saved careers that resolve, in catalog order.
    pub careers: Vec<FavoriteSummary>,
    pub persistent: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: String,
    pub is_favorite: bool,
    pub ids: Vec<String>,
}

/// GET /api/v1/favorites
pub async fn handle_list_favorites(State(state): State<AppState>) -> Json<FavoritesResponse> {
    let favorites = state.favorites.lock().await;
    let careers = state
        .catalog
        .all()
        .iter()
        .filter(|r| favorites.is_favorite(&r.id))
        .map(FavoriteSummary::from)
        .collect();

    Json(FavoritesResponse {
        ids: favorites.ids().to_vec(),
        careers,
        persistent: favorites.is_persistent(),
    })
}

/// POST /api/v1/favorites/:id/toggle
///
/// The id is not checked against the catalog.
pub async fn handle_toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ToggleResponse> {
    let mut favorites = state.favorites.lock().await;
    let ids = favorites.toggle(&id).await.to_vec();
    Json(ToggleResponse {
        is_favorite: favorites.is_favorite(&id),
        id,
        ids,
    })
}
