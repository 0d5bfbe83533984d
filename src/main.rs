use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use training_mailer::app::create_app;
use training_mailer::config::AppConfig;
use training_mailer::email::MailjetClient;
use training_mailer::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let dotenv_result = dotenv();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  if let Err(e) = dotenv_result {
    tracing::warn!("No .env file found: {}", e);
  }

  let config = AppConfig::from_env();
  if !config.mailjet.credentials.is_complete() {
    tracing::warn!("MAILJET_API_KEY or MAILJET_API_SECRET is not set, training emails will fail");
  }

  let email_api = MailjetClient::new(config.mailjet.api_url.clone());
  let app_state = SharedAppState::new(config.mailjet.credentials.clone(), config.training_mail.clone(), email_api);
  let app = create_app(app_state);

  let address = format!("0.0.0.0:{}", config.port);
  let listener = tokio::net::TcpListener::bind(&address)
    .await
    .with_context(|| format!("Failed to bind {}", address))?;

  tracing::info!("Server running on http://{}", address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
