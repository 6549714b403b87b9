//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full production router (same middleware stack as
//! `main.rs`) via `tower::ServiceExt::oneshot`, with an in-process
//! [`MediaStore`] fake standing in for the external image host.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use folio_api::auth::jwt::{generate_access_token, JwtConfig};
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_media::{MediaError, MediaFolder, MediaRef, MediaStore, UploadedImage};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Deterministic in-process media store. References are derived from the
/// folder and file name so tests can assert resolved URLs.
pub struct FakeMediaStore;

#[async_trait]
impl MediaStore for FakeMediaStore {
    async fn store(
        &self,
        upload: UploadedImage,
        folder: MediaFolder,
    ) -> Result<MediaRef, MediaError> {
        let stem = upload
            .file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&upload.file_name)
            .to_string();
        Ok(MediaRef::new(format!("{}/{stem}", folder.as_str())))
    }

    fn resolve_url(&self, reference: &MediaRef, secure: bool) -> String {
        let scheme = if secure { "https" } else { "http" };
        format!("{scheme}://media.test/demo/image/upload/{}", reference.as_str())
    }
}

/// Media store whose uploads always fail, for exercising the
/// upload-error path.
pub struct FailingMediaStore;

#[async_trait]
impl MediaStore for FailingMediaStore {
    async fn store(
        &self,
        _upload: UploadedImage,
        _folder: MediaFolder,
    ) -> Result<MediaRef, MediaError> {
        Err(MediaError::Rejected {
            status: 502,
            body: "media host unavailable".to_string(),
        })
    }

    fn resolve_url(&self, reference: &MediaRef, _secure: bool) -> String {
        format!("https://media.test/{}", reference.as_str())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with the fake media store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, Arc::new(FakeMediaStore))
}

/// Build the full application router with an explicit media store.
pub fn build_test_app_with_media(pool: PgPool, media: Arc<dyn MediaStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
    };
    build_app_router(state, &config)
}

/// Issue a valid Bearer token for an arbitrary test user.
pub fn auth_token() -> String {
    generate_access_token(1, "tester", &test_config().jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("request");
    app.oneshot(request).await.expect("response")
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// Boundary used by [`multipart_body`].
const BOUNDARY: &str = "test-boundary-9f8a2b";

/// Assemble a multipart form-data body from text fields and an optional
/// `(field, filename, bytes)` file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub async fn send_multipart(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Response<Body> {
    let (content_type, body) = multipart_body(fields, file);
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body)).expect("request");
    app.oneshot(request).await.expect("response")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
