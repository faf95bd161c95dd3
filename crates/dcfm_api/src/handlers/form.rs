use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use dcfm_service::form::FormPost;
use dcfm_service::render::{expand_shortcodes, RenderContext};

use crate::session::{new_session, session_cookie, session_from_headers};
use crate::AppState;

pub const CONTACT_PATH: &str = "/contact";

const CONTACT_PAGE: &str = "<h1>Contact us</h1>[dcfm_display_form]";
const ENTRIES_PAGE: &str = "<h1>Entries</h1>[dcfm_display_data]";

/// GET /contact
pub async fn show_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    contact_page(&state, &headers)
}

/// POST /contact
///
/// The visitor always gets the page back; the outcome is only logged.
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(post): Form<FormPost>,
) -> Response {
    let session = session_from_headers(&headers).unwrap_or_default();
    // Outcome is logged inside the service; the page looks the same either way.
    let _ = state.service.handle_form_post(&post, &session).await;
    contact_page(&state, &headers)
}

/// GET /contact/entries
pub async fn show_entries(State(state): State<AppState>) -> Response {
    match state.service.list_entries().await {
        Ok(entries) => {
            let ctx = RenderContext { action: CONTACT_PATH, nonce: "", entries: &entries };
            Html(expand_shortcodes(ENTRIES_PAGE, &ctx)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list submissions");
            (StatusCode::INTERNAL_SERVER_ERROR, Html("<p>Entries are unavailable.</p>")).into_response()
        }
    }
}

fn contact_page(state: &AppState, headers: &HeaderMap) -> Response {
    let (session, fresh) = match session_from_headers(headers) {
        Some(session) => (session, false),
        None => (new_session(), true),
    };

    let nonce = state.service.form_nonce(&session);
    let ctx = RenderContext { action: CONTACT_PATH, nonce: &nonce, entries: &[] };
    let page = Html(expand_shortcodes(CONTACT_PAGE, &ctx));

    if fresh {
        ([(header::SET_COOKIE, session_cookie(&session))], page).into_response()
    } else {
        page.into_response()
    }
}
