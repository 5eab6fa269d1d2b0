use std::error::Error;
use std::fmt;

use serde::Serialize;

#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

impl fmt::Debug for SmtpConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SmtpConfig")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ResendConfig {
  pub api_key: String,
  pub api_base: String,
  pub default_from: String,
  pub default_reply_to: Option<String>,
}

impl fmt::Debug for ResendConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ResendConfig")
      .field("api_key", &"<redacted>")
      .field("api_base", &self.api_base)
      .field("default_from", &self.default_from)
      .field("default_reply_to", &self.default_reply_to)
      .finish()
  }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SendGridConfig {
  pub api_key: String,
  pub api_base: String,
  pub from_email: String,
  pub default_reply_to: Option<String>,
}

impl fmt::Debug for SendGridConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SendGridConfig")
      .field("api_key", &"<redacted>")
      .field("api_base", &self.api_base)
      .field("from_email", &self.from_email)
      .field("default_reply_to", &self.default_reply_to)
      .finish()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub html: String,
  pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
  pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
  Rejected(String),
  Transport(String),
}

impl ProviderError {
  pub fn message(&self) -> &str {
    match self {
      ProviderError::Rejected(msg) | ProviderError::Transport(msg) => msg,
    }
  }
}

impl Error for ProviderError {}

impl fmt::Display for ProviderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProviderError::Rejected(msg) => write!(f, "Provider rejected message: {}", msg),
      ProviderError::Transport(msg) => write!(f, "Provider transport failure: {}", msg),
    }
  }
}
