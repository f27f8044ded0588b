//! Homework engine: HTTP clients, notifier and the polling loop.
mod api;
mod notifier;
mod poll;
mod settings;
mod transport;

pub use api::{HomeworkApi, PracticumClient};
pub use notifier::{Notifier, NotifyOutcome};
pub use poll::{CycleReport, PollLoop};
pub use settings::{
    system_clock, Clock, PollSettings, PRACTICUM_ENDPOINT, RETRY_PERIOD, TELEGRAM_API_BASE,
};
pub use transport::{MessageTransport, TelegramTransport};
