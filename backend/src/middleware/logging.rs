use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;

/// Emits a structured event for every 4xx/5xx response. The body is buffered
/// so the `code` field of the JSON error payload can be logged, then handed
/// back to the caller unchanged.
pub async fn log_error_responses(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    let latency_ms = start.elapsed().as_millis() as u64;

    let (mut parts, body) = response.into_parts();
    let (body, code) = match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
        Ok(bytes) => {
            let code = error_code(&bytes);
            (Body::from(bytes), code)
        }
        Err(err) => {
            tracing::warn!(error = ?err, "Failed to buffer error response body");
            parts.headers.remove(CONTENT_LENGTH);
            (Body::empty(), None)
        }
    };
    let code = code.as_deref().unwrap_or("-");

    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            %method,
            path = %path,
            request_id = %request_id,
            latency_ms,
            code = %code,
            "Request failed"
        );
    } else {
        tracing::warn!(
            status = status.as_u16(),
            %method,
            path = %path,
            request_id = %request_id,
            latency_ms,
            code = %code,
            "Request rejected"
        );
    }

    Response::from_parts(parts, body)
}

fn error_code(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    value.get("code")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn error_code_reads_json_payload() {
        assert_eq!(
            error_code(br#"{"error":"x","code":"NOT_FOUND"}"#).as_deref(),
            Some("NOT_FOUND")
        );
        assert_eq!(error_code(b"plain text"), None);
    }

    #[tokio::test]
    async fn error_body_is_forwarded_unchanged() {
        let app = Router::new()
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, r#"{"code":"NOT_FOUND"}"#) }),
            )
            .layer(middleware::from_fn(log_error_responses));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"code":"NOT_FOUND"}"#);
    }
}
