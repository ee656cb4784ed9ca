//! Visitor identification (cookie based)

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use hpe::Visitor;

pub const VISITOR_COOKIE: &str = "hpe_visitor";

const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Attach a [`Visitor`] to every request.
/// Reuses the `hpe_visitor` cookie, or mints a new id and sets the cookie.
pub async fn visitor_middleware(mut request: Request, next: Next) -> Response {
    let existing = visitor_from_headers(request.headers());
    let visitor = existing.unwrap_or_else(|| {
        let minted = Visitor::new();
        tracing::debug!("New visitor {}", minted);
        minted
    });

    request.extensions_mut().insert(visitor);
    let mut response = next.run(request).await;

    if existing.is_none() {
        match HeaderValue::from_str(&set_cookie_value(visitor)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Could not encode visitor cookie: {}", e),
        }
    }

    response
}

/// Find a well-formed visitor cookie
pub fn visitor_from_headers(headers: &HeaderMap) -> Option<Visitor> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == VISITOR_COOKIE)
        .find_map(|(_, value)| value.parse().ok())
}

fn set_cookie_value(visitor: Visitor) -> String {
    format!(
        "{VISITOR_COOKIE}={visitor}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; HttpOnly; SameSite=Lax"
    )
}
