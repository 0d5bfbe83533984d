use std::fmt;

use serde::{
  de::{IgnoredAny, MapAccess, Visitor},
  Deserialize, Deserializer, Serialize,
};

/// A training request as posted by the website form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
  pub name: String,
  pub email: String,
  pub message: String,
  #[serde(rename = "phonenumber")]
  pub phone_number: String,
}

impl FormSubmission {
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    message: impl Into<String>,
    phone_number: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      email: email.into(),
      message: message.into(),
      phone_number: phone_number.into(),
    }
  }

  /// Decodes a raw request body. Only a JSON object is accepted.
  pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
    serde_json::from_slice(body)
  }

  fn slot(&mut self, key: &str) -> Option<&mut String> {
    match key.to_lowercase().as_str() {
      "name" => Some(&mut self.name),
      "email" => Some(&mut self.email),
      "message" => Some(&mut self.message),
      "phonenumber" => Some(&mut self.phone_number),
      _ => None,
    }
  }
}

/// Keys match field names case-insensitively and the last matching key in
/// document order wins. `null` leaves a field untouched, absent fields stay
/// empty and unknown keys are skipped.
impl<'de> Deserialize<'de> for FormSubmission {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(FormSubmissionVisitor)
  }
}

struct FormSubmissionVisitor;

impl<'de> Visitor<'de> for FormSubmissionVisitor {
  type Value = FormSubmission;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a JSON object")
  }

  fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut submission = FormSubmission::default();

    while let Some(key) = map.next_key::<String>()? {
      match submission.slot(&key) {
        Some(slot) => {
          if let Some(value) = map.next_value::<Option<String>>()? {
            *slot = value;
          }
        }
        None => {
          map.next_value::<IgnoredAny>()?;
        }
      }
    }

    Ok(submission)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

impl MessageResponse {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}
