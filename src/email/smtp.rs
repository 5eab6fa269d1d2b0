use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::provider::EmailProvider;
use super::types::{Delivery, OutgoingEmail, ProviderError, SmtpConfig};

/// Sends through an authenticated SMTP account. The account address is
/// always the envelope sender and the fallback reply-to.
pub struct SmtpProvider {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
  pub fn new(smtp_config: SmtpConfig) -> anyhow::Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpProvider {
      smtp_config,
      transporter,
    })
  }

  fn build_message(&self, email: &OutgoingEmail) -> Result<Message, ProviderError> {
    let reply_to = email.reply_to.as_deref().unwrap_or(&self.smtp_config.username);

    let mut builder = Message::builder()
      .from(parse_mailbox(&email.from)?)
      .reply_to(parse_mailbox(reply_to)?)
      .subject(&email.subject)
      .header(ContentType::TEXT_HTML);

    for recipient in &email.to {
      builder = builder.to(parse_mailbox(recipient)?);
    }

    builder
      .body(email.html.clone())
      .map_err(|e| ProviderError::Rejected(e.to_string()))
  }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, ProviderError> {
  address
    .trim()
    .parse()
    .map_err(|e| ProviderError::Rejected(format!("Invalid address '{}': {}", address, e)))
}

#[async_trait]
impl EmailProvider for SmtpProvider {
  fn name(&self) -> &'static str {
    "smtp"
  }

  fn sender_for(&self, _send_from: Option<&str>) -> String {
    self.smtp_config.username.clone()
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, ProviderError> {
    let message = self.build_message(email)?;

    match self.transporter.send(message).await {
      Ok(_) => Ok(Delivery::default()),
      Err(e) if e.is_permanent() => Err(ProviderError::Rejected(e.to_string())),
      Err(e) => Err(ProviderError::Transport(e.to_string())),
    }
  }
}
