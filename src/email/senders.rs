use std::collections::HashMap;

pub const DEFAULT_VERIFIED_SENDER: &str = "onboarding@resend.dev";

/// Maps a sending-domain key to an address the provider has verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSenderDirectory {
  senders: HashMap<String, String>,
  default_sender: String,
}

impl VerifiedSenderDirectory {
  pub fn new(default_sender: impl Into<String>) -> Self {
    Self {
      senders: HashMap::new(),
      default_sender: default_sender.into(),
    }
  }

  pub fn standard(default_sender: impl Into<String>) -> Self {
    Self::new(default_sender).with_sender("duendes.app", "pacto@duendes.app")
  }

  pub fn with_sender(mut self, domain: impl Into<String>, address: impl Into<String>) -> Self {
    self.senders.insert(domain.into(), address.into());
    self
  }

  pub fn default_sender(&self) -> &str {
    &self.default_sender
  }

  pub fn resolve(&self, send_from: Option<&str>) -> &str {
    send_from
      .and_then(|domain| self.senders.get(domain))
      .map(String::as_str)
      .unwrap_or(&self.default_sender)
  }
}

impl Default for VerifiedSenderDirectory {
  fn default() -> Self {
    Self::standard(DEFAULT_VERIFIED_SENDER)
  }
}
