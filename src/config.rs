use anyhow::{anyhow, bail, Context};

use crate::email::{
  ResendConfig, SendGridConfig, SmtpConfig, DEFAULT_VERIFIED_SENDER, RESEND_API_BASE, SENDGRID_API_BASE,
};
use crate::utils::non_empty;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
  Smtp(SmtpConfig),
  Resend(ResendConfig),
  SendGrid(SendGridConfig),
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
  pub bind_addr: String,
  pub provider: ProviderConfig,
}

impl RelayConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| non_empty(lookup(key));
    let require = |key: &str| get(key).ok_or_else(|| anyhow!("{} environment variable must be set.", key));

    let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let provider_name = get("EMAIL_PROVIDER").unwrap_or_else(|| "smtp".to_string());

    let provider = match provider_name.to_ascii_lowercase().as_str() {
      "smtp" | "gmail" => {
        let port = match get("SMTP_PORT") {
          Some(port) => port
            .parse()
            .with_context(|| format!("SMTP_PORT must be a port number, got '{}'", port))?,
          None => 587,
        };
        ProviderConfig::Smtp(SmtpConfig {
          host: get("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
          port,
          username: require("EMAIL_USER")?,
          password: require("EMAIL_APP_PASSWORD")?,
        })
      }
      "resend" => ProviderConfig::Resend(ResendConfig {
        api_key: require("RESEND_API_KEY")?,
        api_base: get("RESEND_API_BASE").unwrap_or_else(|| RESEND_API_BASE.to_string()),
        default_from: get("RESEND_DEFAULT_FROM").unwrap_or_else(|| DEFAULT_VERIFIED_SENDER.to_string()),
        default_reply_to: get("EMAIL_REPLY_TO"),
      }),
      "sendgrid" => ProviderConfig::SendGrid(SendGridConfig {
        api_key: require("SENDGRID_API_KEY")?,
        api_base: get("SENDGRID_API_BASE").unwrap_or_else(|| SENDGRID_API_BASE.to_string()),
        from_email: require("EMAIL_FROM")?,
        default_reply_to: get("EMAIL_REPLY_TO"),
      }),
      other => bail!("Unknown EMAIL_PROVIDER '{}', expected smtp, resend or sendgrid", other),
    };

    Ok(Self { bind_addr, provider })
  }
}
