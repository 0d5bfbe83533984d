use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};

use anyhow::anyhow;
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use tower::ServiceExt;
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

use crate::{
  app::create_app,
  config::{MailjetCredentials, TrainingMailSettings},
  email::{EmailApi, OutboundEmail, SendMailResponse, SentMessage},
  state::SharedAppState,
};

/// Records every message handed to it instead of talking to Mailjet.
#[derive(Clone, Default)]
pub struct RecordingEmailApi {
  sent: Arc<Mutex<Vec<OutboundEmail>>>,
  failure: Option<String>,
}

impl RecordingEmailApi {
  pub fn succeeding() -> Self {
    Self::default()
  }

  pub fn failing(reason: &str) -> Self {
    Self {
      failure: Some(reason.to_string()),
      ..Self::default()
    }
  }

  pub fn sent(&self) -> Vec<OutboundEmail> {
    self.sent.lock().expect("recording lock").clone()
  }

  pub fn calls(&self) -> usize {
    self.sent.lock().expect("recording lock").len()
  }
}

#[async_trait]
impl EmailApi for RecordingEmailApi {
  async fn send_mail(
    &self,
    _credentials: &MailjetCredentials,
    message: &OutboundEmail,
  ) -> anyhow::Result<SendMailResponse> {
    self.sent.lock().expect("recording lock").push(message.clone());

    if let Some(reason) = &self.failure {
      return Err(anyhow!(reason.clone()));
    }

    Ok(SendMailResponse {
      sent: message
        .recipients
        .iter()
        .enumerate()
        .map(|(i, recipient)| SentMessage {
          email: recipient.email.clone(),
          message_id: i as u64 + 1,
          message_uuid: None,
        })
        .collect(),
    })
  }
}

pub fn app_with_api(credentials: MailjetCredentials, api: RecordingEmailApi) -> Router {
  let state = SharedAppState::new(credentials, TrainingMailSettings::default(), api);
  create_app(state)
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_string()))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

/// Counts WARN and ERROR events emitted while its subscriber is the
/// thread's default.
#[derive(Clone, Default)]
pub struct LogCounter {
  count: Arc<AtomicUsize>,
}

impl LogCounter {
  pub fn install(&self) -> DefaultGuard {
    tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
  }

  pub fn at_least_warn(&self) -> usize {
    self.count.load(Ordering::SeqCst)
  }
}

impl<S: Subscriber> Layer<S> for LogCounter {
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    if *event.metadata().level() <= Level::WARN {
      self.count.fetch_add(1, Ordering::SeqCst);
    }
  }
}
