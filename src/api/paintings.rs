//! Painting endpoints.
//!
//! Slug routes answer with the painting, a 301 to its canonical path, or 404.
//! All lookups go through [`PaintingService`](crate::services::PaintingService).

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::validation::parse_painting_id;
use super::{ApiError, AppState, FactView, PaintingView};
use crate::domain::SlugPair;
use crate::services::Resolution;

/// Prefix every painting route is mounted under.
pub const PAINTINGS_PATH: &str = "/api/v1/paintings";

/// Canonical URL of a painting, with each slug percent-encoded.
#[must_use]
pub fn canonical_path(slugs: &SlugPair) -> String {
    format!(
        "{}/{}/{}",
        PAINTINGS_PATH,
        urlencoding::encode(&slugs.artist_slug),
        urlencoding::encode(&slugs.painting_slug)
    )
}

/// `301 Moved Permanently` to the canonical path.
///
/// `axum::response::Redirect::permanent` answers 308, not 301.
fn moved_permanently(target: &SlugPair) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, canonical_path(target))],
    )
        .into_response()
}

/// `GET /api/v1/paintings/{artist_slug}/{painting_slug}`
pub async fn get_painting(
    State(state): State<Arc<AppState>>,
    Path((artist_slug, painting_slug)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let slugs = SlugPair::new(artist_slug, painting_slug);

    match state.painting_service.resolve(&slugs).await? {
        Resolution::Found(resolved) => Ok(Json(PaintingView::from(resolved)).into_response()),
        Resolution::Redirect(target) => Ok(moved_permanently(&target)),
        Resolution::NotFound => Err(ApiError::not_found("Painting", &slugs)),
    }
}

/// `GET /api/v1/paintings/{combined_slug}`
pub async fn redirect_combined_slug(
    State(state): State<Arc<AppState>>,
    Path(combined_slug): Path<String>,
) -> Result<Response, ApiError> {
    state
        .painting_service
        .resolve_combined(&combined_slug)
        .await?
        .map(|target| moved_permanently(&target))
        .ok_or_else(|| ApiError::not_found("Painting", &combined_slug))
}

/// `GET /api/v1/paintings/by-id/{painting_id}/facts`
pub async fn list_facts(
    State(state): State<Arc<AppState>>,
    Path(painting_id): Path<String>,
) -> Result<Json<Vec<FactView>>, ApiError> {
    let painting_id = parse_painting_id(&painting_id)?;

    let facts = state.painting_service.facts_for(painting_id).await?;

    Ok(Json(facts.into_iter().map(FactView::from).collect()))
}
