//! Page Routes - The community page and its strings

use axum::{
    extract::Query,
    http::{header, HeaderMap},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::html::PAGE_HTML;
use crate::locale::{Locale, Strings};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StringsResponse {
    pub locale: Locale,
    pub strings: &'static Strings,
}

fn negotiate(query: &LangQuery, headers: &HeaderMap) -> Locale {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|h| h.to_str().ok());
    Locale::negotiate(query.lang.as_deref(), accept_language)
}

/// Fill the page template for a locale
pub fn render_page(locale: Locale) -> String {
    let strings = locale.strings();
    // Keep "</script>" out of the inline script
    let strings_json = serde_json::to_string(strings)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    PAGE_HTML
        .replace("{{lang}}", locale.code())
        .replace("{{title}}", strings.title)
        .replace("{{strings}}", &strings_json)
}

pub async fn index(Query(query): Query<LangQuery>, headers: HeaderMap) -> Html<String> {
    Html(render_page(negotiate(&query, &headers)))
}

pub async fn strings(Query(query): Query<LangQuery>, headers: HeaderMap) -> Json<StringsResponse> {
    let locale = negotiate(&query, &headers);
    Json(StringsResponse {
        locale,
        strings: locale.strings(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/strings", get(strings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::testing::{test_app, FakeProfileRepository};

    #[test]
    fn test_render_page_fills_placeholders() {
        let page = render_page(Locale::Fr);
        assert!(page.contains("<html lang=\"fr\">"));
        assert!(page.contains("Rejoindre le réseau"));
        assert!(page.contains("T.votes_label"));
        assert!(!page.contains("{{"));
    }

    #[tokio::test]
    async fn test_index_uses_accept_language() {
        let app = test_app(Arc::new(FakeProfileRepository::default()));

        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Join the network"));
    }

    #[tokio::test]
    async fn test_strings_endpoint() {
        let app = test_app(Arc::new(FakeProfileRepository::default()));

        let response = app
            .oneshot(Request::get("/api/strings?lang=fr").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["locale"], "fr");
        assert_eq!(body["strings"]["values_label"], "Valeurs");
        assert_eq!(body["strings"]["votes_label"], "Votes");
    }
}
