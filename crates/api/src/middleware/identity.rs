//! Client identity extraction for Axum handlers.
//!
//! Identity in this demo deployment is header-driven: `x-user-id`
//! names the player, and the client IP is resolved from proxy
//! headers before the transport address. The storage default
//! (`demo-user`) and the guard-key default (`anonymous`) differ on
//! purpose; both come from the original deployment and are preserved
//! as-is.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use cardforge_core::guard::ANONYMOUS_USER;

use crate::state::AppState;

/// Storage identity used when no `x-user-id` header is sent.
pub const DEMO_USER: &str = "demo-user";

/// Per-request client identity.
///
/// Use as an extractor parameter in any handler:
///
/// ```ignore
/// async fn my_handler(identity: ClientIdentity) -> AppResult<Json<()>> {
///     tracing::info!(user = %identity.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    /// Username for storage lookups (`x-user-id`, default
    /// [`DEMO_USER`]).
    pub user_id: String,
    /// Throttling key: `{header_or_anonymous}:{ip}`.
    pub guard_key: String,
}

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_user = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty());
        let ip = client_ip(parts);

        Ok(Self {
            user_id: header_user.unwrap_or(DEMO_USER).to_string(),
            guard_key: format!("{}:{ip}", header_user.unwrap_or(ANONYMOUS_USER)),
        })
    }
}

/// Resolve the client IP: first `x-forwarded-for` entry, then
/// `x-real-ip`, then the transport remote address, else `unknown`.
fn client_ip(parts: &Parts) -> String {
    if let Some(forwarded) = header_str(parts, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = header_str(parts, "x-real-ip") {
        return real_ip.to_string();
    }

    if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    fn parts_for(builder: axum::http::request::Builder) -> Parts {
        let (parts, _) = builder.body(Body::empty()).unwrap().into_parts();
        parts
    }

    #[test]
    fn forwarded_for_takes_the_first_entry() {
        let parts = parts_for(
            Request::builder()
                .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
                .header("x-real-ip", "198.51.100.2"),
        );

        assert_eq!(client_ip(&parts), "203.0.113.7");
    }

    #[test]
    fn real_ip_is_the_second_choice() {
        let parts = parts_for(Request::builder().header("x-real-ip", "198.51.100.2"));

        assert_eq!(client_ip(&parts), "198.51.100.2");
    }

    #[test]
    fn connect_info_is_the_third_choice() {
        let mut parts = parts_for(Request::builder());
        parts
            .extensions
            .insert(ConnectInfo::<SocketAddr>("192.0.2.9:4242".parse().unwrap()));

        assert_eq!(client_ip(&parts), "192.0.2.9");
    }

    #[test]
    fn falls_back_to_unknown() {
        let parts = parts_for(Request::builder());

        assert_eq!(client_ip(&parts), "unknown");
    }
}
