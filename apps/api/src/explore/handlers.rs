use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CareerRecord;
use crate::errors::AppError;
use crate::explore::filter::{apply_filter, CategoryFilter, FilterSpec};
use crate::state::AppState;

/// Upper end of the browse salary slider.
pub const BROWSE_SALARY_CEILING: u32 = 250_000;

#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub category: Option<String>,
    /// Comma-separated interest tags.
    pub interests: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub q: Option<String>,
}

impl BrowseQuery {
    pub fn into_spec(self) -> FilterSpec {
        FilterSpec {
            category: CategoryFilter::from_param(self.category.as_deref()),
            interest_tags: self
                .interests
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            salary_floor: self.salary_min.unwrap_or(0),
            salary_ceiling: self.salary_max.unwrap_or(BROWSE_SALARY_CEILING),
            search_text: self.q.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CareerListItem {
    #[serde(flatten)]
    pub career: CareerRecord,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub total: usize,
    pub count: usize,
    pub careers: Vec<CareerListItem>,
}

/// GET /api/v1/careers
pub async fn handle_browse(
    State(state): State<AppState>,
    query: Result<Query<BrowseQuery>, QueryRejection>,
) -> Result<Json<BrowseResponse>, AppError> {
    let Query(query) = query?;
    let spec = query.into_spec();
    let matched = apply_filter(state.catalog.all(), &spec);
    debug!("Browse filter matched {} of {}", matched.len(), state.catalog.len());

    let favorites = state.favorites.lock().await;
    let careers: Vec<CareerListItem> = matched
        .into_iter()
        .map(|career| CareerListItem {
            is_favorite: favorites.is_favorite(&career.id),
            career: career.clone(),
        })
        .collect();

    Ok(Json(BrowseResponse {
        total: state.catalog.len(),
        count: careers.len(),
        careers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};

    use crate::state::testing::{call, test_app};

    #[test]
    fn test_query_defaults_mirror_browse_ui() {
        let spec = BrowseQuery::default().into_spec();
        assert_eq!(spec.category, CategoryFilter::Any);
        assert!(spec.interest_tags.is_empty());
        assert_eq!(spec.salary_floor, 0);
        assert_eq!(spec.salary_ceiling, 250_000);
        assert_eq!(spec.search_text, "");
    }

    #[test]
    fn test_query_splits_interest_list() {
        let spec = BrowseQuery {
            interests: Some("design,,technology".into()),
            ..BrowseQuery::default()
        }
        .into_spec();
        assert_eq!(spec.interest_tags, vec!["design", "technology"]);
    }

    #[tokio::test]
    async fn test_browse_by_category() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/api/v1/careers?category=Design", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 27);
        let careers = body["careers"].as_array().unwrap();
        assert!(!careers.is_empty());
        assert_eq!(body["count"], careers.len());
        assert!(careers.iter().all(|c| c["category"] == "Design"));
        assert_eq!(careers[0]["is_favorite"], false);
    }

    #[tokio::test]
    async fn test_browse_search_and_salary() {
        let app = test_app();
        let (_, body) = call(
            &app,
            Method::GET,
            "/api/v1/careers?q=ENGINEER&salary_max=120000",
            None,
        )
        .await;
        let ids: Vec<&str> = body["careers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"mechanical-engineer"));
        assert!(!ids.contains(&"devops-engineer")); // median 135000
    }

    #[tokio::test]
    async fn test_browse_unknown_category_is_empty_not_error() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/api/v1/careers?category=Astronomy", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_malformed_salary_is_validation_error() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/api/v1/careers?salary_max=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }
}
