//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs request method, path, status, and duration.
///
/// Server errors are logged at `warn`, everything else at `info`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration = start.elapsed();
    if response.status().is_server_error() {
        warn!(
            %method,
            %path,
            status,
            duration_ms = %duration.as_millis(),
            "HTTP request failed"
        );
    } else {
        info!(
            %method,
            %path,
            status,
            duration_ms = %duration.as_millis(),
            "HTTP request"
        );
    }

    response
}
