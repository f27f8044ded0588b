use std::sync::Arc;

use bot_logging::{bot_debug, bot_error, bot_info};
use homework_core::{extract_update, Credentials, PollError};

use crate::api::{HomeworkApi, PracticumClient};
use crate::notifier::{Notifier, NotifyOutcome};
use crate::settings::PollSettings;
use crate::transport::{MessageTransport, TelegramTransport};

/// What a single cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    Delivered(String),
    /// The status text matched the previous notification.
    Suppressed,
    NoUpdates,
    Failed(PollError),
}

/// Fetch, validate, parse and notify, forever.
///
/// Owns the time cursor and the notifier; nothing else mutates them.
pub struct PollLoop {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    settings: PollSettings,
    cursor: i64,
}

impl PollLoop {
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        transport: Arc<dyn MessageTransport>,
        chat_id: impl Into<String>,
        settings: PollSettings,
    ) -> Self {
        let cursor = (settings.clock)();
        Self {
            api,
            notifier: Notifier::new(transport, chat_id),
            settings,
            cursor,
        }
    }

    /// Wires the Practicum client and the Telegram transport from credentials.
    pub fn from_credentials(credentials: &Credentials, settings: PollSettings) -> Self {
        let api = PracticumClient::new(settings.endpoint.clone(), credentials.practicum_token());
        let transport = TelegramTransport::new(
            settings.telegram_api_base.clone(),
            credentials.telegram_token(),
        );
        Self::new(
            Arc::new(api),
            Arc::new(transport),
            credentials.telegram_chat_id(),
            settings,
        )
    }

    /// Lower bound of the next fetch window, in Unix seconds.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.notifier.last_message()
    }

    /// Runs until the process is terminated.
    pub async fn run_forever(mut self) {
        bot_info!(
            "Polling {} every {:?}",
            self.settings.endpoint,
            self.settings.retry_period
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.settings.retry_period).await;
        }
    }

    /// Runs one cycle without the trailing sleep.
    ///
    /// Failures never escape: they are logged, possibly reported to the chat,
    /// and handed back in the report. The cursor only advances on success.
    pub async fn run_cycle(&mut self) -> CycleReport {
        match self.try_cycle().await {
            Ok(report) => {
                self.cursor = (self.settings.clock)();
                report
            }
            Err(err) => {
                self.handle_failure(&err).await;
                CycleReport::Failed(err)
            }
        }
    }

    async fn try_cycle(&mut self) -> Result<CycleReport, PollError> {
        let response = self.api.fetch(self.cursor).await?;
        let Some(message) = extract_update(&response)? else {
            bot_debug!("No homework status changes since {}", self.cursor);
            return Ok(CycleReport::NoUpdates);
        };
        bot_debug!("Homework status parsed");

        match self.notifier.notify(&message).await? {
            NotifyOutcome::Sent => Ok(CycleReport::Delivered(message)),
            NotifyOutcome::Suppressed => Ok(CycleReport::Suppressed),
        }
    }

    async fn handle_failure(&mut self, err: &PollError) {
        match err {
            PollError::Transport { .. }
            | PollError::UpstreamStatus { .. }
            | PollError::Shape(_)
            | PollError::Parse(_)
            | PollError::Delivery(_) => bot_error!("{}", err),
            PollError::MalformedBody { .. } => bot_error!("{} ({:?})", err, err),
        }

        if !err.is_reportable() {
            return;
        }
        // A broken transport must not turn one failure into a loop of them.
        if let Err(report_err) = self.notifier.notify(&err.to_string()).await {
            bot_error!("Could not report failure to chat: {}", report_err);
        }
    }
}
