use crate::{store::StoreError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /redirect/:id
///
/// Answers 302 Found with the stored URL in `Location`. Every lookup
/// failure, not just a missing row, is reported to the client as 404.
pub async fn redirect(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    tracing::debug!("Looking up short code '{}'", id);

    let mapping = match state.store.lookup(&id).await {
        Ok(mapping) => mapping,
        Err(StoreError::NotFound) => {
            tracing::warn!("Short code '{}' not found", id);
            return not_found();
        }
        Err(e) => {
            tracing::error!("Store error looking up short code '{}': {:?}", id, e);
            return not_found();
        }
    };

    // Stored URLs are unvalidated and may not be representable in a header.
    let location = match HeaderValue::from_str(&mapping.original_url) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(
                "Stored URL for '{}' is not a valid Location header: {}",
                id,
                e
            );
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    };

    tracing::info!("Redirecting '{}' to {}", id, mapping.original_url);
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Invalid request").into_response()
}

#[cfg(test)]
mod tests {
    use crate::{
        handlers::test_support::{app, app_with, body_bytes, send, BrokenStore},
        store::UrlStore,
    };
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use std::sync::Arc;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn known_code_redirects_with_found() {
        let (app, store) = app();
        let id = store.create("http://example.com").await.unwrap();

        let response = send(app, get(&format!("/redirect/{id}"))).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "http://example.com"
        );
    }

    #[tokio::test]
    async fn shorten_then_redirect() {
        let (app, _) = app();

        let response = send(
            app.clone(),
            Request::builder()
                .method(Method::POST)
                .uri("/shorten")
                .body(Body::from(r#"{"url":"http://example.com"}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        let short_url = body["short_url"].as_str().unwrap().to_owned();
        assert_eq!(short_url.len(), 8);

        let response = send(app, get(&format!("/redirect/{short_url}"))).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "http://example.com"
        );
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let (app, _) = app();

        let response = send(app, get("/redirect/deadbeef")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn store_failure_is_reported_as_not_found() {
        let app = app_with(Arc::new(BrokenStore));

        let response = send(app, get("/redirect/deadbeef")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, b"Invalid request");
    }

    #[tokio::test]
    async fn unencodable_target_is_internal_error() {
        let (app, store) = app();
        let id = store.create("http://example.com/\nsplit").await.unwrap();

        let response = send(app, get(&format!("/redirect/{id}"))).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
