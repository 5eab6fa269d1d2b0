use std::sync::Arc;

use crate::config::RelayConfig;
use crate::email::{build_provider, EmailProvider};

pub mod error;

/// Treats an empty or whitespace-only value the same as a missing one.
pub fn non_empty(value: Option<String>) -> Option<String> {
  value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn init_email_provider(config: &RelayConfig) -> anyhow::Result<Arc<dyn EmailProvider>> {
  let provider = build_provider(&config.provider)?;
  tracing::info!("Email provider configured: {}", provider.name());
  Ok(provider)
}
