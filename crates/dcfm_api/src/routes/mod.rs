use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::require_api_token;
use crate::handlers::form::{show_entries, show_form, submit_form, CONTACT_PATH};
use crate::handlers::health_check;
use crate::handlers::submission::{insert_data, select_data};
use crate::AppState;

pub const API_NAMESPACE: &str = "/dcfm/v1";

pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/insert", post(insert_data))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_token))
        .route("/select", get(select_data));

    Router::new()
        .route("/health", get(health_check))
        .nest(API_NAMESPACE, api)
        .route(CONTACT_PATH, get(show_form).post(submit_form))
        .route("/contact/entries", get(show_entries))
        .with_state(state)
}
