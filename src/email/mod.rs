//! Outbound email delivery
//!
//! The rest of the crate talks to the provider through [`EmailApi`];
//! [`MailjetClient`] is the production implementation backed by reqwest.

mod service;
mod types;

pub use service::{EmailApi, MailjetClient};
pub use types::{OutboundEmail, Recipient, SendMailResponse, SentMessage, REPLY_TO_HEADER};
