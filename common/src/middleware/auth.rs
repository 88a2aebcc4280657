//! Bearer token middleware.
//!
//! The token is not validated here. It only has to be present so it can be
//! forwarded upstream, byte for byte.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;

/// Token taken from `Authorization: Bearer <token>`, stored in request extensions.
///
/// Kept as a raw header value so tokens with non-ASCII bytes survive the trip.
#[derive(Clone, Debug)]
pub struct BearerToken(pub HeaderValue);

impl BearerToken {
    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

/// Rejects requests without a bearer token before they reach the handler.
///
/// # Errors
/// Returns [`AppError::MissingToken`] (401) when the header is absent, not in
/// `Bearer <token>` form, or carries an empty token.
pub async fn require_bearer_token(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(req.headers()).ok_or(AppError::MissingToken)?;

    req.extensions_mut().insert(BearerToken(token));
    Ok(next.run(req).await)
}

/// Extract bearer token from Authorization header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<HeaderValue> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.as_bytes().strip_prefix(b"Bearer "))
        .filter(|token| !token.is_empty())
        .and_then(|token| HeaderValue::from_bytes(token).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::get, Extension, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn headers(authorization: &[u8]) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_bytes(authorization).unwrap());
        map
    }

    #[test]
    fn test_extracts_token() {
        let token = extract_bearer_token(&headers(b"Bearer abc123")).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_keeps_non_ascii_token_bytes() {
        let token = extract_bearer_token(&headers(b"Bearer caf\xe9-42")).unwrap();
        assert_eq!(token.as_bytes(), b"caf\xe9-42");
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(extract_bearer_token(&headers(b"Basic dXNlcjpwYXNz")).is_none());
        assert!(extract_bearer_token(&headers(b"abc123")).is_none());
        assert!(extract_bearer_token(&headers(b"Bearer ")).is_none());
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(token): Extension<BearerToken>| async move {
                    token.header_value().as_bytes().to_vec()
                }),
            )
            .layer(middleware::from_fn(require_bearer_token))
    }

    #[tokio::test]
    async fn test_middleware_passes_token_to_handler() {
        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, "Bearer abc123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"abc123");
    }

    #[tokio::test]
    async fn test_middleware_accepts_non_ascii_token() {
        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer caf\xe9").unwrap())
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"caf\xe9");
    }

    #[tokio::test]
    async fn test_middleware_short_circuits_without_token() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
