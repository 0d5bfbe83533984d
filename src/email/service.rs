use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

use crate::config::MailjetCredentials;
use crate::email::types::{OutboundEmail, SendMailResponse};

#[async_trait]
pub trait EmailApi: Send + Sync {
  async fn send_mail(&self, credentials: &MailjetCredentials, message: &OutboundEmail) -> Result<SendMailResponse>;
}

#[derive(Debug, Clone)]
pub struct MailjetClient {
  http_client: reqwest::Client,
  base_url: String,
}

impl MailjetClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      http_client: reqwest::Client::new(),
      base_url: base_url.into(),
    }
  }

  fn send_url(&self) -> String {
    format!("{}/v3/send", self.base_url.trim_end_matches('/'))
  }
}

#[async_trait]
impl EmailApi for MailjetClient {
  async fn send_mail(&self, credentials: &MailjetCredentials, message: &OutboundEmail) -> Result<SendMailResponse> {
    let response = self
      .http_client
      .post(self.send_url())
      .basic_auth(&credentials.api_key, Some(&credentials.api_secret))
      .json(message)
      .send()
      .await
      .context("Mailjet request failed")?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(anyhow!("Mailjet returned {}: {}", status, body));
    }

    response
      .json::<SendMailResponse>()
      .await
      .context("Failed to decode Mailjet response")
  }
}
