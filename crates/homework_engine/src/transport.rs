use bot_logging::bot_debug;
use homework_core::{excerpt_text, DeliveryError};
use serde::Serialize;

/// Anything that can put a text message in front of the user.
#[async_trait::async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Sends plain-text messages through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramTransport {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_base.trim_end_matches('/'),
            self.token
        )
    }
}

#[async_trait::async_trait]
impl MessageTransport for TelegramTransport {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        let payload = SendMessage { chat_id, text };
        // The request URL embeds the bot token; keep it out of error text.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .await
            .map_err(|err| DeliveryError::Transport {
                message: err.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: excerpt_text(&body),
            });
        }

        bot_debug!("Telegram accepted message for chat {}", chat_id);
        Ok(())
    }
}
