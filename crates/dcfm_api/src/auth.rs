use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use sha2::{Digest, Sha256};

use crate::handlers::ApiMessage;
use crate::AppState;

/// Guards a route with `Authorization: Bearer <token>` when a token is configured.
pub async fn require_api_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.api_token.as_deref() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match provided {
        Some(token) if tokens_match(token.trim(), expected) => next.run(request).await,
        _ => {
            tracing::warn!(path = %request.uri().path(), "rejected request without a valid API token");
            (StatusCode::UNAUTHORIZED, Json(ApiMessage::new("Unauthorized"))).into_response()
        }
    }
}

// Comparing digests keeps the comparison time independent of the secret.
fn tokens_match(provided: &str, expected: &str) -> bool {
    Sha256::digest(provided.as_bytes()) == Sha256::digest(expected.as_bytes())
}
