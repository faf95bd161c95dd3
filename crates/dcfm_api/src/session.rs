use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Cookie that binds form tokens to one browser.
pub const SESSION_COOKIE: &str = "dcfm_session";

/// The visitor's session id, if they carry a well-formed one.
pub fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(|id| id.to_string())
}

pub fn new_session() -> String {
    Uuid::new_v4().to_string()
}

pub fn session_cookie(session: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_reads_session_among_other_cookies() {
        let id = new_session();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}; lang=en", SESSION_COOKIE, id)).unwrap(),
        );
        assert_eq!(session_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_ignores_missing_or_malformed_session() {
        assert_eq!(session_from_headers(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("dcfm_session=not-a-uuid"));
        assert_eq!(session_from_headers(&headers), None);
    }

    #[test]
    fn test_cookie_round_trip() {
        let id = new_session();
        let cookie = session_cookie(&id);

        let mut headers = HeaderMap::new();
        let pair = cookie.split(';').next().unwrap();
        headers.insert(header::COOKIE, HeaderValue::from_str(pair).unwrap());
        assert_eq!(session_from_headers(&headers), Some(id));
    }
}
