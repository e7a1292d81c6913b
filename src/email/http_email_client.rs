use crate::email::{EmailProvider, OutboundEmail, SendError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

const FALLBACK_ERROR_MESSAGE: &str = "Failed to send email";

/// Provider client over plain HTTP: one bearer-authenticated JSON POST to
/// `{base_url}/emails` per send.
pub struct HttpEmailClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl HttpEmailClient {
    pub fn new(base_url: String, api_key: Secret<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the provider HTTP client.");
        Self {
            http_client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl EmailProvider for HttpEmailClient {
    async fn send(&self, email: &OutboundEmail) -> Result<serde_json::Value, SendError> {
        let response = self
            .http_client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(email)
            .send()
            .await
            .context("Failed to reach the email provider.")?;

        if response.status().is_success() {
            let payload = response
                .json()
                .await
                .context("Failed to parse the provider response.")?;
            Ok(payload)
        } else {
            let status = response.status();
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|message| message.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.into());
            tracing::warn!(%status, %message, "The email provider rejected the send request.");
            Err(SendError::Rejected(message))
        }
    }
}
