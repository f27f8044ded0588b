use std::sync::Arc;

use bot_logging::bot_debug;
use homework_core::{DedupFilter, DeliveryError};

use crate::transport::MessageTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    /// Identical to the previous message; nothing was sent.
    Suppressed,
}

/// Delivers messages to one chat, dropping immediate repeats.
pub struct Notifier {
    transport: Arc<dyn MessageTransport>,
    chat_id: String,
    filter: DedupFilter,
}

impl Notifier {
    pub fn new(transport: Arc<dyn MessageTransport>, chat_id: impl Into<String>) -> Self {
        Self {
            transport,
            chat_id: chat_id.into(),
            filter: DedupFilter::new(),
        }
    }

    /// Sends `message` unless it equals the last message handed over.
    ///
    /// A failed send is not remembered, so the same text goes out again on
    /// the next attempt.
    pub async fn notify(&mut self, message: &str) -> Result<NotifyOutcome, DeliveryError> {
        if self.filter.is_repeat(message) {
            bot_debug!("Message unchanged since last delivery, skipping");
            return Ok(NotifyOutcome::Suppressed);
        }

        bot_debug!("Sending message to chat {}", self.chat_id);
        self.transport.send(&self.chat_id, message).await?;
        bot_debug!("Message sent: {}", message);
        self.filter.remember(message);
        Ok(NotifyOutcome::Sent)
    }

    pub fn last_message(&self) -> Option<&str> {
        self.filter.last()
    }
}
