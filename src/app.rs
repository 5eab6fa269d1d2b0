use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
  domains::mail::rest::mail_routes,
  middleware::cors::with_cors_headers,
  state::{AppState, SharedAppState},
};

pub fn create_app(state: SharedAppState) -> Router {
  let router = Router::new()
    .route("/", get(status_handler))
    .nest("/api", mail_routes())
    .with_state(state);

  with_cors_headers(router).layer(TraceLayer::new_for_http())
}

pub async fn status_handler(State(state): State<SharedAppState>) -> Html<String> {
  Html(format!("<h1>Email Service</h1><p>Provider: {}</p>", state.provider_name()))
}
