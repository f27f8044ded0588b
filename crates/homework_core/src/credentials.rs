use std::fmt;

use crate::error::ConfigurationError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Settings that must be present before the bot may start, in reporting order.
pub const REQUIRED_VARIABLES: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

/// Secrets and destination for one bot instance. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    practicum_token: String,
    telegram_token: String,
    telegram_chat_id: String,
}

impl Credentials {
    /// Reads every required setting through `lookup`.
    ///
    /// Absent, empty and whitespace-only values are all rejected, and the
    /// error names every one of them, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let values = REQUIRED_VARIABLES.map(|name| {
            let value = lookup(name).filter(|value| !value.trim().is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        });
        if !missing.is_empty() {
            return Err(ConfigurationError::MissingVariables(missing));
        }

        let [practicum_token, telegram_token, telegram_chat_id] = values;
        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }

    pub fn practicum_token(&self) -> &str {
        &self.practicum_token
    }

    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    pub fn telegram_chat_id(&self) -> &str {
        &self.telegram_chat_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}
