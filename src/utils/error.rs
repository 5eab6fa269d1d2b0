use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};

use crate::domains::mail::{model::FailureResponse, service::MailServiceError};
use crate::email::GENERIC_SEND_ERROR;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    let message = message.into();
    if message.is_empty() {
      return Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SEND_ERROR);
    }
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(FailureResponse {
      success: false,
      error: self.message,
    });

    (self.status_code, body).into_response()
  }
}

// An unreadable body surfaces the way any other failure while handling the request does.
impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::warn!("Malformed send request: {}", error);
    AppError::internal_server_error(error.to_string())
  }
}

impl From<MailServiceError> for AppError {
  fn from(error: MailServiceError) -> Self {
    match error {
      MailServiceError::InvalidRequest(msg) => AppError::bad_request(msg),
      MailServiceError::ProviderRejected(msg) => AppError::internal_server_error(msg),
      MailServiceError::TransportFailure(msg) => AppError::internal_server_error(msg),
    }
  }
}
