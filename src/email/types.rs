use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const REPLY_TO_HEADER: &str = "Reply-To";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
  #[serde(rename = "Email")]
  pub email: String,
}

/// A single message in the shape of the Mailjet v3 send payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
  #[serde(rename = "FromEmail")]
  pub from_email: String,
  #[serde(rename = "FromName")]
  pub from_name: String,
  #[serde(rename = "Subject")]
  pub subject: String,
  #[serde(rename = "Text-part")]
  pub text_part: String,
  #[serde(rename = "Html-part")]
  pub html_part: String,
  #[serde(rename = "Recipients")]
  pub recipients: Vec<Recipient>,
  #[serde(rename = "Headers", default, skip_serializing_if = "BTreeMap::is_empty")]
  pub headers: BTreeMap<String, String>,
}

impl OutboundEmail {
  pub fn reply_to(&self) -> Option<&str> {
    self.headers.get(REPLY_TO_HEADER).map(String::as_str)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
  #[serde(rename = "Email")]
  pub email: String,
  #[serde(rename = "MessageID", default)]
  pub message_id: u64,
  #[serde(rename = "MessageUUID", default, skip_serializing_if = "Option::is_none")]
  pub message_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMailResponse {
  #[serde(rename = "Sent", default)]
  pub sent: Vec<SentMessage>,
}
