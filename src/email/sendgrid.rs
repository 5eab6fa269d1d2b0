use async_trait::async_trait;
use serde_json::{json, Map, Value};

use super::provider::{extract_error_from_text, EmailProvider};
use super::types::{Delivery, OutgoingEmail, ProviderError, SendGridConfig};

pub const SENDGRID_API_BASE: &str = "https://api.sendgrid.com/v3";

pub struct SendGridProvider {
  config: SendGridConfig,
  client: reqwest::Client,
}

impl SendGridProvider {
  pub fn new(config: SendGridConfig) -> Self {
    Self {
      config,
      client: reqwest::Client::new(),
    }
  }

  fn endpoint(&self) -> String {
    format!("{}/mail/send", self.config.api_base.trim_end_matches('/'))
  }

  fn request_body(&self, email: &OutgoingEmail) -> Value {
    let recipients: Vec<Value> = email.to.iter().map(|address| json!({ "email": address })).collect();

    let mut body = Map::new();
    body.insert("personalizations".to_string(), json!([{ "to": recipients }]));
    body.insert("from".to_string(), json!({ "email": email.from }));
    if let Some(reply_to) = email.reply_to.as_deref().or(self.config.default_reply_to.as_deref()) {
      body.insert("reply_to".to_string(), json!({ "email": reply_to }));
    }
    body.insert("subject".to_string(), Value::String(email.subject.clone()));
    body.insert(
      "content".to_string(),
      json!([{ "type": "text/html", "value": email.html }]),
    );

    Value::Object(body)
  }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
  fn name(&self) -> &'static str {
    "sendgrid"
  }

  fn sender_for(&self, _send_from: Option<&str>) -> String {
    self.config.from_email.clone()
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, ProviderError> {
    let resp = self
      .client
      .post(self.endpoint())
      .bearer_auth(&self.config.api_key)
      .json(&self.request_body(email))
      .send()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
      let body_text = resp.text().await.unwrap_or_default();
      tracing::debug!("SendGrid responded with status {}: {}", status.as_u16(), body_text);
      return Err(ProviderError::Rejected(extract_error_from_text(&body_text)));
    }

    let id = resp
      .headers()
      .get("x-message-id")
      .and_then(|v| v.to_str().ok())
      .map(|s| s.to_string());

    Ok(Delivery { id })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::spawn_stub_server;
  use axum::{
    body::Body,
    http::{Response, StatusCode},
  };

  fn config(api_base: String) -> SendGridConfig {
    SendGridConfig {
      api_key: "SG.fake-key".to_string(),
      api_base,
      from_email: "relay@colmena.dev".to_string(),
      default_reply_to: None,
    }
  }

  fn outgoing() -> OutgoingEmail {
    OutgoingEmail {
      from: "relay@colmena.dev".to_string(),
      to: vec!["a@b.com".to_string(), "c@d.com".to_string()],
      subject: "Hi".to_string(),
      html: "<p>Hello</p>".to_string(),
      reply_to: Some("visitor@example.com".to_string()),
    }
  }

  #[test]
  fn send_from_never_changes_the_sender() {
    let provider = SendGridProvider::new(config(SENDGRID_API_BASE.to_string()));
    assert_eq!(provider.sender_for(Some("duendes.app")), "relay@colmena.dev");
    assert_eq!(provider.sender_for(None), "relay@colmena.dev");
  }

  #[test]
  fn reply_to_is_omitted_without_a_default() {
    let provider = SendGridProvider::new(config(SENDGRID_API_BASE.to_string()));
    let mut email = outgoing();
    email.reply_to = None;
    assert!(provider.request_body(&email).get("reply_to").is_none());
  }

  #[tokio::test]
  async fn plain_email_succeeds_with_message_id() {
    let (addr, mut rx, handle) = spawn_stub_server(|| {
      Response::builder()
        .status(StatusCode::ACCEPTED)
        .header("x-message-id", "abc123")
        .body(Body::empty())
        .unwrap()
    })
    .await;

    let provider = SendGridProvider::new(config(format!("http://{}", addr)));
    let delivery = provider.send(&outgoing()).await.expect("sendgrid send should succeed");
    assert_eq!(delivery.id.as_deref(), Some("abc123"));

    let req = rx.recv().await.expect("request should be recorded");
    handle.abort();

    assert_eq!(req.path, "/mail/send");
    assert_eq!(
      req.headers.get("authorization").and_then(|v| v.to_str().ok()),
      Some("Bearer SG.fake-key"),
    );
    let body: Value = serde_json::from_slice(&req.body).expect("valid json body");
    assert_eq!(body["from"]["email"], "relay@colmena.dev");
    assert_eq!(body["reply_to"]["email"], "visitor@example.com");
    assert_eq!(body["personalizations"][0]["to"][0]["email"], "a@b.com");
    assert_eq!(body["personalizations"][0]["to"][1]["email"], "c@d.com");
    assert_eq!(body["subject"], "Hi");
    assert_eq!(body["content"][0]["type"], "text/html");
    assert_eq!(body["content"][0]["value"], "<p>Hello</p>");
  }

  #[tokio::test]
  async fn error_response_surfaces_nested_message() {
    let (addr, _rx, handle) = spawn_stub_server(|| {
      Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .body(Body::from(
          json!({ "errors": [{ "message": "Bad request", "field": null }] }).to_string(),
        ))
        .unwrap()
    })
    .await;

    let provider = SendGridProvider::new(config(format!("http://{}", addr)));
    let err = provider.send(&outgoing()).await.expect_err("sendgrid call should fail");
    handle.abort();

    assert_eq!(err, ProviderError::Rejected("Bad request".to_string()));
  }
}
