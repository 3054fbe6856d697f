use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use serde_json::json;

use crate::domains::jobs::{search_and_publish, SearchRequest};
use crate::server::app::AppState;

/// Response for a completed discovery run.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub total_found: usize,
}

/// Run the discovery pipeline for one search request.
///
/// Individual publish failures are already absorbed inside the run and only
/// lower the published count; anything that aborts the run itself comes
/// back as a 500 with the failure chain in `detail`.
pub async fn update_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<UpdateResponse>, (StatusCode, Json<serde_json::Value>)> {
    match search_and_publish(&request, state.searcher.as_ref(), state.publisher.as_ref()).await {
        Ok(summary) => Ok(Json(UpdateResponse {
            message: format!("Published {} job events", summary.published),
            total_found: summary.total_found,
        })),
        Err(e) => {
            tracing::error!(error = %e, "Job update failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": format!("{e:#}") })),
            ))
        }
    }
}
