//! Email delivery backends
//!
//! Every backend implements [`EmailProvider`]. SMTP goes through lettre,
//! the Resend and SendGrid HTTP APIs go through reqwest.

mod provider;
mod resend;
mod sendgrid;
mod senders;
mod smtp;
mod types;

use std::sync::Arc;

pub use provider::{extract_error_message, EmailProvider, GENERIC_SEND_ERROR};
pub use resend::{ResendProvider, RESEND_API_BASE};
pub use sendgrid::{SendGridProvider, SENDGRID_API_BASE};
pub use senders::{VerifiedSenderDirectory, DEFAULT_VERIFIED_SENDER};
pub use smtp::SmtpProvider;
pub use types::{Delivery, OutgoingEmail, ProviderError, ResendConfig, SendGridConfig, SmtpConfig};

use crate::config::ProviderConfig;

pub fn build_provider(config: &ProviderConfig) -> anyhow::Result<Arc<dyn EmailProvider>> {
  let provider: Arc<dyn EmailProvider> = match config {
    ProviderConfig::Smtp(smtp) => Arc::new(SmtpProvider::new(smtp.clone())?),
    ProviderConfig::Resend(resend) => Arc::new(ResendProvider::new(resend.clone())),
    ProviderConfig::SendGrid(sendgrid) => Arc::new(SendGridProvider::new(sendgrid.clone())),
  };
  Ok(provider)
}
