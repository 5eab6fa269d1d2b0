use std::sync::Arc;

use crate::domains::mail::{
  model::{SendRequest, SendResponse},
  service::{MailService, MailServiceError, MailServiceImpl},
};
use crate::email::EmailProvider;

pub trait AppState: Clone + Send + Sync + 'static {
  fn provider_name(&self) -> &'static str;
  fn send_email(
    &self,
    req: SendRequest,
  ) -> impl std::future::Future<Output = Result<SendResponse, MailServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub mail_service: Arc<MailServiceImpl>,
}

impl SharedAppState {
  pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
    let mail_service = Arc::new(MailServiceImpl::new(provider));

    Self { mail_service }
  }
}

impl AppState for SharedAppState {
  fn provider_name(&self) -> &'static str {
    self.mail_service.provider_name()
  }

  async fn send_email(&self, req: SendRequest) -> Result<SendResponse, MailServiceError> {
    self.mail_service.send(req).await
  }
}
