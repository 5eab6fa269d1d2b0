use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode, Uri},
  response::Response,
  Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;
use tower::ServiceExt;

use crate::email::{Delivery, EmailProvider, OutgoingEmail, ProviderError, VerifiedSenderDirectory};
use crate::{app::create_app, state::SharedAppState};

pub struct StubProvider {
  senders: Option<VerifiedSenderDirectory>,
  outcome: Result<Delivery, ProviderError>,
  sent: Mutex<Vec<OutgoingEmail>>,
}

impl StubProvider {
  pub const FIXED_SENDER: &'static str = "relay@example.com";

  pub fn succeeding(id: Option<&str>) -> Arc<Self> {
    Self::build(None, Ok(Delivery { id: id.map(str::to_string) }))
  }

  pub fn failing(error: ProviderError) -> Arc<Self> {
    Self::build(None, Err(error))
  }

  pub fn with_directory(senders: VerifiedSenderDirectory, outcome: Result<Delivery, ProviderError>) -> Arc<Self> {
    Self::build(Some(senders), outcome)
  }

  fn build(senders: Option<VerifiedSenderDirectory>, outcome: Result<Delivery, ProviderError>) -> Arc<Self> {
    Arc::new(Self {
      senders,
      outcome,
      sent: Mutex::new(Vec::new()),
    })
  }

  pub fn sent(&self) -> Vec<OutgoingEmail> {
    self.sent.lock().expect("stub mutex poisoned").clone()
  }
}

#[async_trait]
impl EmailProvider for StubProvider {
  fn name(&self) -> &'static str {
    "stub"
  }

  fn sender_for(&self, send_from: Option<&str>) -> String {
    match &self.senders {
      Some(senders) => senders.resolve(send_from).to_string(),
      None => Self::FIXED_SENDER.to_string(),
    }
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, ProviderError> {
    self.sent.lock().expect("stub mutex poisoned").push(email.clone());
    self.outcome.clone()
  }
}

pub fn app_with_provider(provider: Arc<dyn EmailProvider>) -> Router {
  let state = SharedAppState::new(provider);
  create_app(state)
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  call(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, HeaderMap, Bytes) {
  post_with_content_type(app, uri, "application/json", body).await
}

pub async fn post_with_content_type(
  app: Router,
  uri: &str,
  content_type: &str,
  body: &'static str,
) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", content_type)
    .body(Body::from(body))
    .expect("build request");

  call(app, request).await
}

pub async fn options(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("OPTIONS")
    .uri(uri)
    .header("origin", "https://form.example.com")
    .header("access-control-request-method", "POST")
    .body(Body::empty())
    .expect("build request");

  call(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  call(app, request).await
}

pub struct RecordedRequest {
  pub path: String,
  pub headers: HeaderMap,
  pub body: Bytes,
}

/// Serves `respond` on an ephemeral local port and records each request it receives.
pub async fn spawn_stub_server<F>(respond: F) -> (SocketAddr, UnboundedReceiver<RecordedRequest>, JoinHandle<()>)
where
  F: Fn() -> Response + Clone + Send + Sync + 'static,
{
  let (tx, rx) = unbounded_channel();

  let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, body: Bytes| {
    let tx = tx.clone();
    let respond = respond.clone();
    async move {
      let _ = tx.send(RecordedRequest {
        path: uri.path().to_string(),
        headers,
        body,
      });
      respond()
    }
  });

  let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
  let addr = listener.local_addr().expect("stub server address");
  let handle = tokio::spawn(async move {
    axum::serve(listener, app).await.expect("stub server");
  });

  (addr, rx, handle)
}
