use async_trait::async_trait;
use std::collections::BTreeMap;
use std::error::Error;

use super::model::FormSubmission;
use crate::{
  config::{MailjetCredentials, TrainingMailSettings},
  email::{EmailApi, OutboundEmail, Recipient, REPLY_TO_HEADER},
};

#[derive(Debug)]
pub enum TrainingServiceError {
  MissingCredentials,
  DeliveryFailure(String),
}

impl Error for TrainingServiceError {}

impl std::fmt::Display for TrainingServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TrainingServiceError::MissingCredentials => write!(f, "Mailjet API keys not set"),
      TrainingServiceError::DeliveryFailure(msg) => write!(f, "Failed to send email: {}", msg),
    }
  }
}

#[async_trait]
pub trait TrainingService: Send + Sync {
  async fn send_training_email(&self, submission: FormSubmission) -> Result<(), TrainingServiceError>;
}

pub struct TrainingServiceImpl<A> {
  credentials: MailjetCredentials,
  settings: TrainingMailSettings,
  email_api: A,
}

impl<A> TrainingServiceImpl<A>
where
  A: EmailApi,
{
  pub fn new(credentials: MailjetCredentials, settings: TrainingMailSettings, email_api: A) -> Self {
    Self {
      credentials,
      settings,
      email_api,
    }
  }
}

#[async_trait]
impl<A> TrainingService for TrainingServiceImpl<A>
where
  A: EmailApi,
{
  async fn send_training_email(&self, submission: FormSubmission) -> Result<(), TrainingServiceError> {
    if !self.credentials.is_complete() {
      return Err(TrainingServiceError::MissingCredentials);
    }

    let email = build_training_email(&self.settings, &submission);

    let response = self
      .email_api
      .send_mail(&self.credentials, &email)
      .await
      .map_err(|e| TrainingServiceError::DeliveryFailure(format!("{:#}", e)))?;

    tracing::info!("Email sent! Response: {:?}", response);

    Ok(())
  }
}

pub fn build_training_email(settings: &TrainingMailSettings, submission: &FormSubmission) -> OutboundEmail {
  let FormSubmission {
    name,
    email,
    message,
    phone_number,
  } = submission;

  OutboundEmail {
    from_email: settings.from_email.clone(),
    from_name: format!("{} (via {})", name, settings.site_label),
    subject: settings.subject.clone(),
    text_part: format!(
      "Name: {}\nPhone: {}\nEmail: {}\nMessage: {}",
      name, phone_number, email, message
    ),
    html_part: format!(
      "<strong>Name:</strong> {}<br><strong>Phone:</strong> {}<br><strong>Email:</strong> {}<br><strong>Message:</strong> {}",
      name, phone_number, email, message
    ),
    recipients: settings
      .recipients
      .iter()
      .map(|address| Recipient {
        email: address.clone(),
      })
      .collect(),
    headers: BTreeMap::from([(REPLY_TO_HEADER.to_string(), format!("{} <{}>", name, email))]),
  }
}
