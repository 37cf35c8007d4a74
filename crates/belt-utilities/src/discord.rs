//! Discord webhook message sender
//!
//! The only utility that needs shared configuration: `configure()` stores
//! the webhook URL from the injected secrets, `run()` posts to it.

use async_trait::async_trait;
use belt_core::config::Secrets;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use parking_lot::Mutex;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Sends a typed message to the configured Discord webhook
pub struct DiscordWebhookUtility {
    webhook: Mutex<Option<String>>,
}

impl DiscordWebhookUtility {
    pub fn new() -> Self {
        Self {
            webhook: Mutex::new(None),
        }
    }
}

impl Default for DiscordWebhookUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for DiscordWebhookUtility {
    fn name(&self) -> &str {
        "Discord Webhook"
    }

    fn aliases(&self) -> &[&str] {
        &["discord"]
    }

    fn configure(&self, secrets: &Secrets) {
        *self.webhook.lock() = secrets.discord_webhook.clone();
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let webhook = self.webhook.lock().clone();
        let Some(webhook) = webhook.filter(|w| !w.is_empty()) else {
            println!("Whoops! You dont have a webhook defined in your config!");
            return Ok(());
        };

        let message = prompt_line("Enter the message:")?;

        let client = reqwest::Client::new();
        client
            .post(&webhook)
            .json(&WebhookPayload { content: &message })
            .send()
            .await?
            .error_for_status()?;

        println!("Message sent!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_as_discord_expects() {
        let payload = WebhookPayload { content: "hello" };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"content":"hello"}"#
        );
    }

    #[test]
    fn configure_stores_the_webhook() {
        let utility = DiscordWebhookUtility::new();
        let secrets = Secrets {
            discord_webhook: Some("https://discord.test/hook".to_string()),
            ..Default::default()
        };
        utility.configure(&secrets);
        assert_eq!(
            utility.webhook.lock().as_deref(),
            Some("https://discord.test/hook")
        );
    }

    #[test]
    fn reconfigure_replaces_previous_secrets() {
        let utility = DiscordWebhookUtility::new();
        utility.configure(&Secrets {
            discord_webhook: Some("first".to_string()),
            ..Default::default()
        });
        utility.configure(&Secrets::default());
        assert!(utility.webhook.lock().is_none());
    }
}
