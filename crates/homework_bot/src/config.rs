//! Process environment access. Nothing outside this module reads env vars.

use std::env;
use std::path::PathBuf;

use homework_core::{ConfigurationError, Credentials};
use log::LevelFilter;

const LOG_LEVEL: &str = "LOG_LEVEL";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

/// Loads `.env` from the working directory or its parents, if there is one.
pub(crate) fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

pub(crate) fn load_credentials() -> Result<Credentials, ConfigurationError> {
    Credentials::from_lookup(|name| env::var(name).ok())
}

pub(crate) fn log_level() -> LevelFilter {
    level_or_default(env::var(LOG_LEVEL).ok().as_deref())
}

fn level_or_default(raw: Option<&str>) -> LevelFilter {
    raw.and_then(bot_logging::parse_level)
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_level_defaults_to_debug() {
        assert_eq!(level_or_default(None), LevelFilter::Debug);
    }

    #[test]
    fn unknown_level_defaults_to_debug() {
        assert_eq!(level_or_default(Some("chatty")), LevelFilter::Debug);
    }

    #[test]
    fn explicit_level_wins() {
        assert_eq!(level_or_default(Some("error")), LevelFilter::Error);
    }
}
