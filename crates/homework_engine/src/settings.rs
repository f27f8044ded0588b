use std::sync::Arc;
use std::time::Duration;

pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Source of the current Unix time, in seconds.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(|| chrono::Utc::now().timestamp())
}

#[derive(Clone)]
pub struct PollSettings {
    pub endpoint: String,
    pub telegram_api_base: String,
    /// Pause between the end of one cycle and the start of the next.
    pub retry_period: Duration,
    pub clock: Clock,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            endpoint: PRACTICUM_ENDPOINT.to_string(),
            telegram_api_base: TELEGRAM_API_BASE.to_string(),
            retry_period: RETRY_PERIOD,
            clock: system_clock(),
        }
    }
}

impl std::fmt::Debug for PollSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollSettings")
            .field("endpoint", &self.endpoint)
            .field("telegram_api_base", &self.telegram_api_base)
            .field("retry_period", &self.retry_period)
            .finish_non_exhaustive()
    }
}
