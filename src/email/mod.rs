mod http_email_client;

use crate::configuration::SenderDefaults;
use crate::domain::SendRequest;
use async_trait::async_trait;
pub use http_email_client::HttpEmailClient;

/// The payload posted to the provider's send endpoint, with the sender and
/// reply address already resolved.
#[derive(Debug, serde::Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

impl OutboundEmail {
    pub fn new(request: SendRequest, defaults: &SenderDefaults) -> Self {
        Self {
            from: request.from.unwrap_or_else(|| defaults.from.clone()),
            to: request.to,
            subject: request.subject,
            html: request.html,
            reply_to: request.reply_to.unwrap_or_else(|| defaults.reply_to.clone()),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SendError {
    /// The provider answered with a non-2xx status; the message is the one
    /// taken from its error payload, or a generic fallback.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Issue one send call. On success the provider's response payload is
    /// returned untouched.
    async fn send(&self, email: &OutboundEmail) -> Result<serde_json::Value, SendError>;
}
