use std::sync::Arc;

use crate::{
  config::{MailjetCredentials, TrainingMailSettings},
  domains::training::{
    model::FormSubmission,
    service::{TrainingService, TrainingServiceError, TrainingServiceImpl},
  },
  email::EmailApi,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_training_email(
    &self,
    submission: FormSubmission,
  ) -> impl std::future::Future<Output = Result<(), TrainingServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub training_service: Arc<dyn TrainingService>,
}

impl SharedAppState {
  pub fn new<A>(credentials: MailjetCredentials, settings: TrainingMailSettings, email_api: A) -> Self
  where
    A: EmailApi + 'static,
  {
    let training_service: Arc<dyn TrainingService> = Arc::new(TrainingServiceImpl::new(credentials, settings, email_api));

    Self { training_service }
  }
}

impl AppState for SharedAppState {
  async fn send_training_email(&self, submission: FormSubmission) -> Result<(), TrainingServiceError> {
    self.training_service.send_training_email(submission).await
  }
}
