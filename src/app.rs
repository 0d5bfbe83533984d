use axum::{
  http::{header, Method},
  response::Json as JsonResponse,
  routing::get,
  Router,
};
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  domains::training::{model::MessageResponse, rest::training_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/api/", get(welcome_handler))
    .route("/api", get(welcome_handler))
    .merge(training_routes())
    .with_state(state)
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http().on_failure(()))
}

pub async fn welcome_handler() -> JsonResponse<MessageResponse> {
  JsonResponse(MessageResponse::new("Welcome to the API"))
}

/// Every origin is accepted. The request origin is echoed back because a
/// wildcard cannot be combined with credentials.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::mirror_request())
    .allow_methods([Method::POST, Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .expose_headers([header::CONTENT_LENGTH])
    .allow_credentials(true)
}
