use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A missing or `null` `url` decodes as the empty string; `URL` and `Url`
/// are accepted as the key too.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default, alias = "URL", alias = "Url")]
    url: Option<String>,
}

impl ShortenRequest {
    /// Decode the first JSON value in `body`; anything after it is ignored.
    /// A top-level `null` yields an empty request.
    fn parse(body: &[u8]) -> serde_json::Result<Self> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<Self>>()
            .next();
        match first {
            Some(Ok(request)) => Ok(request.unwrap_or_default()),
            Some(Err(e)) => Err(e),
            None => Err(serde::de::Error::custom("empty request body")),
        }
    }

    fn into_url(self) -> String {
        self.url.unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub full_url: String,
}

/// POST /shorten
///
/// The body is decoded from raw bytes so clients that omit
/// `Content-Type: application/json` are still served. The URL itself is
/// stored as given, without validation.
pub async fn shorten(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let url = match ShortenRequest::parse(&body) {
        Ok(r) => r.into_url(),
        Err(e) => {
            tracing::debug!("Rejecting shorten request body: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    tracing::info!("Received URL to shorten: {}", url);

    match state.store.create(&url).await {
        Ok(short_url) => {
            let full_url = state.config.redirect_url(&short_url);
            Json(ShortenResponse {
                short_url,
                full_url,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to store URL '{}': {:?}", url, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create short URL",
            )
                .into_response()
        }
    }
}
