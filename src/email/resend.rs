use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::provider::{extract_error_from_text, EmailProvider};
use super::senders::VerifiedSenderDirectory;
use super::types::{Delivery, OutgoingEmail, ProviderError, ResendConfig};

pub const RESEND_API_BASE: &str = "https://api.resend.com";

pub struct ResendProvider {
  config: ResendConfig,
  senders: VerifiedSenderDirectory,
  client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ResendEmailRequest<'a> {
  from: &'a str,
  to: &'a [String],
  subject: &'a str,
  html: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ResendEmailResponse {
  id: Option<String>,
}

impl ResendProvider {
  pub fn new(config: ResendConfig) -> Self {
    let senders = VerifiedSenderDirectory::standard(config.default_from.clone());
    Self::with_senders(config, senders)
  }

  pub fn with_senders(config: ResendConfig, senders: VerifiedSenderDirectory) -> Self {
    Self {
      config,
      senders,
      client: reqwest::Client::new(),
    }
  }

  fn endpoint(&self) -> String {
    format!("{}/emails", self.config.api_base.trim_end_matches('/'))
  }
}

#[async_trait]
impl EmailProvider for ResendProvider {
  fn name(&self) -> &'static str {
    "resend"
  }

  fn sender_for(&self, send_from: Option<&str>) -> String {
    self.senders.resolve(send_from).to_string()
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, ProviderError> {
    let payload = ResendEmailRequest {
      from: &email.from,
      to: &email.to,
      subject: &email.subject,
      html: &email.html,
      reply_to: email.reply_to.as_deref().or(self.config.default_reply_to.as_deref()),
    };

    let resp = self
      .client
      .post(self.endpoint())
      .bearer_auth(&self.config.api_key)
      .json(&payload)
      .send()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
      let body_text = resp.text().await.unwrap_or_default();
      tracing::debug!("Resend responded with status {}: {}", status.as_u16(), body_text);
      return Err(ProviderError::Rejected(extract_error_from_text(&body_text)));
    }

    let id = resp
      .json::<ResendEmailResponse>()
      .await
      .ok()
      .and_then(|body| body.id);

    Ok(Delivery { id })
  }
}
