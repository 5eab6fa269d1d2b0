use async_trait::async_trait;
use serde_json::Value;

use super::types::{Delivery, OutgoingEmail, ProviderError};

pub const GENERIC_SEND_ERROR: &str = "Error al enviar email";

#[async_trait]
pub trait EmailProvider: Send + Sync {
  fn name(&self) -> &'static str;

  /// The authenticated sender to use for a request carrying `send_from`.
  fn sender_for(&self, send_from: Option<&str>) -> String;

  async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, ProviderError>;
}

/// Pulls a human-readable message out of a provider error body.
///
/// SendGrid nests it as `errors[0].message`, Resend exposes a flat `message`.
pub fn extract_error_message(body: &Value) -> String {
  let nested = body
    .get("errors")
    .and_then(Value::as_array)
    .and_then(|errors| errors.first())
    .and_then(|first| first.get("message"))
    .and_then(Value::as_str)
    .map(str::trim)
    .filter(|msg| !msg.is_empty());

  let flat = body
    .get("message")
    .and_then(Value::as_str)
    .map(str::trim)
    .filter(|msg| !msg.is_empty());

  nested
    .or(flat)
    .unwrap_or(GENERIC_SEND_ERROR)
    .to_string()
}

pub fn extract_error_from_text(text: &str) -> String {
  match serde_json::from_str::<Value>(text) {
    Ok(body) => extract_error_message(&body),
    Err(_) => GENERIC_SEND_ERROR.to_string(),
  }
}
