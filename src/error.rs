use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::training::service::TrainingServiceError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::warn!("Invalid input: {}", error);
    AppError::bad_request("Invalid input")
  }
}

impl From<TrainingServiceError> for AppError {
  fn from(error: TrainingServiceError) -> Self {
    tracing::error!("Training email not delivered: {}", error);
    AppError::internal_server_error("Failed to send email")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::to_bytes;

  async fn render(error: AppError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    (status, String::from_utf8(body.to_vec()).expect("utf8 body"))
  }

  #[tokio::test]
  async fn test_json_error_maps_to_invalid_input() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let (status, body) = render(json_error.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid input"}"#);
  }

  #[tokio::test]
  async fn test_service_errors_hide_the_cause() {
    let errors = [
      TrainingServiceError::MissingCredentials,
      TrainingServiceError::DeliveryFailure("Mailjet returned 401 Unauthorized: secret detail".to_string()),
    ];

    for error in errors {
      let (status, body) = render(error.into()).await;
      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body, r#"{"error":"Failed to send email"}"#);
    }
  }

  #[test]
  fn test_app_error_into_status_code() {
    let status: StatusCode = AppError::bad_request("nope").into();
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
