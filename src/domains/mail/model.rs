use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Recipients {
  One(String),
  Many(Vec<String>),
}

impl Recipients {
  pub fn is_empty(&self) -> bool {
    match self {
      Recipients::One(address) => address.is_empty(),
      Recipients::Many(addresses) => addresses.is_empty(),
    }
  }

  pub fn into_vec(self) -> Vec<String> {
    match self {
      Recipients::One(address) => vec![address],
      Recipients::Many(addresses) => addresses,
    }
  }
}

fn validate_recipients(to: &Recipients) -> Result<(), ValidationError> {
  if to.is_empty() {
    return Err(ValidationError::new("required"));
  }
  Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
  #[validate(required, custom(function = "validate_recipients"))]
  pub to: Option<Recipients>,
  #[validate(required, length(min = 1))]
  pub subject: Option<String>,
  #[validate(required, length(min = 1))]
  pub message: Option<String>,
  /// Reply-to address. Never used as the authenticated sender.
  pub from: Option<String>,
  pub name: Option<String>,
  /// Sending-domain key, only honoured by providers with several verified senders.
  pub send_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendResponse {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FailureResponse {
  pub success: bool,
  pub error: String,
}
