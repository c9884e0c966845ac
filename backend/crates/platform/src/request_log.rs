//! Request Logging Middleware
//!
//! Assigns every request a UUID v4 request id, exposes it to handlers as a
//! [`RequestId`] extension, echoes it in the `X-Request-Id` response header,
//! and logs the request line and its completion with latency.

use std::net::SocketAddr;
use std::time::Instant;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::client::extract_client_info;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

/// Middleware: `Router::layer(axum::middleware::from_fn(log_requests))`
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    req.extensions_mut().insert(RequestId(request_id));

    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client = extract_client_info(req.headers(), direct_ip);
    let method = req.method().clone();
    let uri = req.uri().clone();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        ip = %client.ip_string(),
        user_agent = %client.user_agent,
        "Request started"
    );

    let started = Instant::now();
    let mut response = next.run(req).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status();

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    if status.is_server_error() {
        tracing::error!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request errored"
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request completed"
        );
    }

    response
}
