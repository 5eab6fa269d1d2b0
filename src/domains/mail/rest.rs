use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};
use serde_json::{json, Value};

use super::model::{SendRequest, SendResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route("/send", post(send_handler).options(preflight_handler))
}

pub async fn preflight_handler() -> JsonResponse<Value> {
  JsonResponse(json!({}))
}

pub async fn send_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<SendResponse>, AppError> {
  // Parsed whatever the Content-Type says. Browser forms often post JSON as text/plain.
  let payload: SendRequest = serde_json::from_slice(&body)?;

  state.send_email(payload).await.map(JsonResponse).map_err(Into::into)
}
