use axum::{
  http::{header, HeaderValue},
  Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Stamps the fixed cross-origin header set on every response, errors included.
pub fn with_cors_headers<S>(router: Router<S>) -> Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  router
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_ORIGIN,
      HeaderValue::from_static(ALLOW_ORIGIN),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_METHODS,
      HeaderValue::from_static(ALLOW_METHODS),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_HEADERS,
      HeaderValue::from_static(ALLOW_HEADERS),
    ))
}
