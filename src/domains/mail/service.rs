use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use super::model::{SendRequest, SendResponse};
use super::template::render_html;
use crate::email::{EmailProvider, OutgoingEmail, ProviderError};

pub const SUCCESS_MESSAGE: &str = "Email enviado correctamente";
pub const MISSING_FIELDS_MESSAGE: &str = "Faltan campos: to, subject, message";

#[derive(Debug, PartialEq, Eq)]
pub enum MailServiceError {
  InvalidRequest(String),
  ProviderRejected(String),
  TransportFailure(String),
}

impl Error for MailServiceError {}

impl std::fmt::Display for MailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailServiceError::InvalidRequest(msg) => write!(f, "Invalid Request: {}", msg),
      MailServiceError::ProviderRejected(msg) => write!(f, "Provider Rejected: {}", msg),
      MailServiceError::TransportFailure(msg) => write!(f, "Transport Failure: {}", msg),
    }
  }
}

impl From<ProviderError> for MailServiceError {
  fn from(err: ProviderError) -> Self {
    match err {
      ProviderError::Rejected(msg) => MailServiceError::ProviderRejected(msg),
      ProviderError::Transport(msg) => MailServiceError::TransportFailure(msg),
    }
  }
}

#[async_trait]
pub trait MailService: Send + Sync {
  fn provider_name(&self) -> &'static str;
  async fn send(&self, req: SendRequest) -> Result<SendResponse, MailServiceError>;
}

pub struct MailServiceImpl {
  provider: Arc<dyn EmailProvider>,
}

impl MailServiceImpl {
  pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
    Self { provider }
  }
}

fn present(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

#[async_trait]
impl MailService for MailServiceImpl {
  fn provider_name(&self) -> &'static str {
    self.provider.name()
  }

  async fn send(&self, req: SendRequest) -> Result<SendResponse, MailServiceError> {
    if let Err(e) = req.validate() {
      tracing::debug!("Rejected send request: {}", e);
      return Err(MailServiceError::InvalidRequest(MISSING_FIELDS_MESSAGE.to_string()));
    }

    let SendRequest {
      to,
      subject,
      message,
      from,
      name,
      send_from,
    } = req;
    let (Some(to), Some(subject), Some(message)) = (to, subject, message) else {
      return Err(MailServiceError::InvalidRequest(MISSING_FIELDS_MESSAGE.to_string()));
    };

    let from = present(from);
    let name = present(name);
    let send_from = present(send_from);

    let sender = self.provider.sender_for(send_from.as_deref());
    let html = render_html(&subject, &message, name.as_deref(), from.as_deref());

    let email = OutgoingEmail {
      from: sender,
      to: to.into_vec(),
      subject,
      html,
      reply_to: from,
    };

    tracing::info!(
      "Sending email via {} from {} to {} recipient(s)",
      self.provider.name(),
      email.from,
      email.to.len()
    );

    match self.provider.send(&email).await {
      Ok(delivery) => {
        tracing::info!("Email accepted by {} (id: {:?})", self.provider.name(), delivery.id);
        Ok(SendResponse {
          success: true,
          message: SUCCESS_MESSAGE.to_string(),
          id: delivery.id,
        })
      }
      Err(e) => {
        tracing::error!("Error enviando email via {}: {}", self.provider.name(), e);
        Err(e.into())
      }
    }
  }
}
