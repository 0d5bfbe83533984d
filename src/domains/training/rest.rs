use axum::{
  body::Bytes,
  extract::{DefaultBodyLimit, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{FormSubmission, MessageResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn training_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/training", post(training_handler))
    .layer(DefaultBodyLimit::disable())
}

pub async fn training_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  let submission = FormSubmission::from_json(&body)?;

  state.send_training_email(submission).await?;

  Ok(JsonResponse(MessageResponse::new("Training Email sent successfully")))
}
