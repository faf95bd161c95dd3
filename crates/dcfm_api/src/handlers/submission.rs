use axum::{extract::State, http::StatusCode, Json};
use dcfm_core::models::{Submission, SubmissionFields};
use dcfm_service::Error;

use super::ApiMessage;
use crate::extract::JsonOrForm;
use crate::AppState;

/// POST /dcfm/v1/insert
///
/// Accepts the fields as a JSON object or as urlencoded form data.
pub async fn insert_data(
    State(state): State<AppState>,
    JsonOrForm(fields): JsonOrForm<SubmissionFields>,
) -> (StatusCode, Json<ApiMessage>) {
    match state.service.submit(&fields).await {
        Ok(id) => {
            tracing::info!(%id, "submission inserted via API");
            let mut body = ApiMessage::new("Data inserted successfully");
            body.id = Some(id);
            (StatusCode::OK, Json(body))
        }
        Err(Error::Validation(errors)) => {
            tracing::debug!(?errors, "API submission rejected");
            let mut body = ApiMessage::new("Invalid submission");
            body.errors = errors;
            (StatusCode::BAD_REQUEST, Json(body))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to insert submission");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiMessage::new("Failed to insert data")),
            )
        }
    }
}

/// GET /dcfm/v1/select
///
/// An empty store is an empty list, not a 404.
pub async fn select_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, (StatusCode, Json<ApiMessage>)> {
    match state.service.list_entries().await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list submissions");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiMessage::new("Failed to fetch data")),
            ))
        }
    }
}
