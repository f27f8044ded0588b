//! Homework core: pure decision logic for the status notifier.
mod credentials;
mod cycle;
mod dedup;
mod error;
mod parse;
mod validate;
mod verdict;

pub use credentials::{
    Credentials, PRACTICUM_TOKEN, REQUIRED_VARIABLES, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN,
};
pub use cycle::extract_update;
pub use dedup::DedupFilter;
pub use error::{
    excerpt, excerpt_text, ConfigurationError, DeliveryError, ParseError, PollError, ShapeError,
    EXCERPT_LIMIT,
};
pub use parse::parse_status;
pub use validate::check_response;
pub use verdict::{verdict_for, HOMEWORK_VERDICTS};
