//! Cross-origin policy: browser origins on loopback hosts with an allowed port.
//!
//! Requests without an `Origin` header (curl, server-to-server) always pass.

use axum::{
    extract::{Request, State},
    http::{header, request::Parts, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use reqwest::Url;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;
use crate::state::AppState;

const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Whether a browser `Origin` value is on the allow-list.
pub fn is_allowed_origin(origin: &str, allowed_ports: &[u16]) -> bool {
    let Ok(url) = Url::parse(origin) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let host_ok = url
        .host_str()
        .is_some_and(|host| LOOPBACK_HOSTS.contains(&host));
    let port_ok = url
        .port()
        .is_some_and(|port| allowed_ports.contains(&port));
    host_ok && port_ok
}

/// CORS response headers for allowed origins.
pub fn cors_layer(allowed_ports: Vec<u16>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin
                .to_str()
                .is_ok_and(|o| is_allowed_origin(o, &allowed_ports))
        }))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Middleware rejecting requests that carry a disallowed `Origin`.
pub async fn reject_disallowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let allowed = origin
            .to_str()
            .is_ok_and(|o| is_allowed_origin(o, &state.config.cors_allowed_ports));
        if !allowed {
            let shown = String::from_utf8_lossy(origin.as_bytes()).into_owned();
            return AppError::OriginNotAllowed(shown).into_response();
        }
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTS: [u16; 2] = [5173, 3000];

    #[test]
    fn test_loopback_hosts_on_allowed_ports() {
        assert!(is_allowed_origin("http://localhost:5173", &PORTS));
        assert!(is_allowed_origin("http://127.0.0.1:3000", &PORTS));
        assert!(is_allowed_origin("https://localhost:3000", &PORTS));
        assert!(is_allowed_origin("http://[::1]:5173", &PORTS));
    }

    #[test]
    fn test_other_ports_are_rejected() {
        assert!(!is_allowed_origin("http://localhost:8081", &PORTS));
        // Default ports are elided by the URL parser, so they never match.
        assert!(!is_allowed_origin("http://localhost", &PORTS));
    }

    #[test]
    fn test_remote_hosts_are_rejected_even_on_allowed_ports() {
        assert!(!is_allowed_origin("http://evil.example:5173", &PORTS));
        assert!(!is_allowed_origin("http://localhost.evil.example:5173", &PORTS));
    }

    #[test]
    fn test_garbage_origins_are_rejected() {
        assert!(!is_allowed_origin("null", &PORTS));
        assert!(!is_allowed_origin("file:///tmp/index.html", &PORTS));
        assert!(!is_allowed_origin("", &PORTS));
    }
}
