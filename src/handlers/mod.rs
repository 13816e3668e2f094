pub mod redirect;
pub mod shorten;

/// GET /
pub async fn index() -> &'static str {
    "Hello, world! This is your URL shortener 🚀"
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, body_bytes, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    #[tokio::test]
    async fn index_greets() {
        let (app, _) = app();

        let response = send(app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_bytes(response).await;
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "Hello, world! This is your URL shortener 🚀"
        );
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (app, _) = app();

        let response = send(
            app,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
