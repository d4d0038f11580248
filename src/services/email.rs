use std::future::Future;

use reqwest::Client;
use serde_json::json;

use crate::error::Result;

/// Outbound mail port. Delivery is fire-and-forget from the caller's point of
/// view; implementations only report transport errors to whoever awaits them.
pub trait EmailSender: Clone + Send + Sync + 'static {
    fn send(
        &self,
        to: String,
        subject: String,
        html_body: String,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Hands messages to the platform's mail-delivery webhook as a JSON POST.
#[derive(Clone)]
pub struct WebhookEmailSender {
    client: Client,
    target_url: String,
}

impl WebhookEmailSender {
    pub fn new(target_url: String) -> Self {
        Self {
            client: Client::new(),
            target_url,
        }
    }
}

impl EmailSender for WebhookEmailSender {
    async fn send(&self, to: String, subject: String, html_body: String) -> Result<()> {
        self.client
            .post(&self.target_url)
            .json(&json!({
                "to": to,
                "subject": subject,
                "html": html_body,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
