//! Notification delivery implementations.

use std::time::Duration;

use async_trait::async_trait;
use common::{Error, Result};
use probe::Notifier;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

/// Delivery timeout for a single webhook call.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts alert messages to a chat-style webhook.
///
/// The payload is the `{"text": ...}` shape that Slack-compatible
/// incoming webhooks accept.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a notifier with its own delivery client.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .map_err(Error::notify)?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        let payload = serde_json::json!({ "text": message });

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await
            .map_err(Error::notify)?;

        if !response.status().is_success() {
            return Err(Error::notify(format!(
                "webhook returned status code {}",
                response.status().as_u16()
            )));
        }

        debug!("Notification delivered");
        Ok(())
    }
}

/// Fallback notifier that records alerts in the log stream.
///
/// Stands in when no webhook is configured, so error-class outcomes
/// still surface somewhere an operator looks.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        info!("Sending notification: {message}");
        Ok(())
    }
}
