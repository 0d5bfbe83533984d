use std::{env, fmt};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAILJET_API_URL: &str = "https://api.mailjet.com";

#[derive(Clone)]
pub struct MailjetCredentials {
  pub api_key: String,
  pub api_secret: String,
}

impl MailjetCredentials {
  pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      api_secret: api_secret.into(),
    }
  }

  pub fn is_complete(&self) -> bool {
    !self.api_key.is_empty() && !self.api_secret.is_empty()
  }
}

impl fmt::Debug for MailjetCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let redact = |value: &str| if value.is_empty() { "<unset>" } else { "<redacted>" };
    f.debug_struct("MailjetCredentials")
      .field("api_key", &redact(&self.api_key))
      .field("api_secret", &redact(&self.api_secret))
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct MailjetConfig {
  pub credentials: MailjetCredentials,
  pub api_url: String,
}

/// Fixed identity and routing of the outgoing training-request email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingMailSettings {
  pub from_email: String,
  /// Appended to the submitter's name to form the sender display name.
  pub site_label: String,
  pub subject: String,
  pub recipients: Vec<String>,
}

impl Default for TrainingMailSettings {
  fn default() -> Self {
    TrainingMailSettings {
      from_email: "klyplusandmore@gmail.com".to_string(),
      site_label: "HOME ABOMO LAW FIRM WEBSITE".to_string(),
      subject: "New Training Request".to_string(),
      recipients: vec![
        "benazizsangare2@gmail.com".to_string(),
        "kerly.fenn@gmail.com".to_string(),
      ],
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub mailjet: MailjetConfig,
  pub training_mail: TrainingMailSettings,
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary key lookup. Missing
  /// credentials are kept empty; they are rejected when a send is attempted.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = TrainingMailSettings::default();

    let port = lookup("PORT")
      .and_then(|port| port.trim().parse().ok())
      .unwrap_or(DEFAULT_PORT);

    let credentials = MailjetCredentials::new(
      lookup("MAILJET_API_KEY").unwrap_or_default(),
      lookup("MAILJET_API_SECRET").unwrap_or_default(),
    );

    let api_url = lookup("MAILJET_API_URL")
      .filter(|url| !url.trim().is_empty())
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|| DEFAULT_MAILJET_API_URL.to_string());

    let recipients = lookup("TRAINING_RECIPIENTS")
      .map(|list| parse_recipients(&list))
      .filter(|list| !list.is_empty())
      .unwrap_or(defaults.recipients);

    let training_mail = TrainingMailSettings {
      from_email: non_empty(lookup("TRAINING_FROM_EMAIL")).unwrap_or(defaults.from_email),
      site_label: non_empty(lookup("TRAINING_SITE_LABEL")).unwrap_or(defaults.site_label),
      subject: non_empty(lookup("TRAINING_SUBJECT")).unwrap_or(defaults.subject),
      recipients,
    };

    AppConfig {
      port,
      mailjet: MailjetConfig { credentials, api_url },
      training_mail,
    }
  }
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

fn parse_recipients(list: &str) -> Vec<String> {
  list
    .split(',')
    .map(str::trim)
    .filter(|address| !address.is_empty())
    .map(str::to_string)
    .collect()
}
