use serde_json::Value;
use thiserror::Error;

/// Longest excerpt of a foreign payload carried inside an error.
pub const EXCERPT_LIMIT: usize = 200;

/// Renders `value` as compact JSON, cut to [`EXCERPT_LIMIT`] characters.
pub fn excerpt(value: &Value) -> String {
    excerpt_text(&value.to_string())
}

/// Cuts arbitrary text to [`EXCERPT_LIMIT`] characters.
pub fn excerpt_text(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LIMIT {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(EXCERPT_LIMIT).collect();
    cut.push('…');
    cut
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// The decoded API response does not have the expected layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Объект {excerpt} не является словарем.")]
    NotAMapping { excerpt: String },
    #[error("Отсутствие ключа homeworks в объекте {excerpt}.")]
    MissingHomeworks { excerpt: String },
    #[error("Ключ homeworks не является списком (получено: {found}) в объекте {excerpt}.")]
    HomeworksNotASequence {
        found: &'static str,
        excerpt: String,
    },
}

/// A single homework record cannot be turned into a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Отсутствие ключа {field} в записи {record}.")]
    MissingField { field: &'static str, record: String },
    #[error("Неожиданный статус домашней работы {status}")]
    UnknownStatus { status: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Сбой при отправке сообщения в Telegram: {message}")]
    Transport { message: String },
    #[error("Telegram отклонил сообщение: код {status}, ответ {body}")]
    Rejected { status: u16, body: String },
}

/// Everything that can go wrong inside one polling cycle.
///
/// The set is closed; the poll loop matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("Сбой в работе программы: Эндпоинт {endpoint} недоступен. Причина: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Сбой в работе программы: Эндпоинт {endpoint} недоступен. Код ответа API: {code}")]
    UpstreamStatus { endpoint: String, code: u16 },
    #[error("Сбой в работе программы: некорректное тело ответа ({message}): {excerpt}")]
    MalformedBody { message: String, excerpt: String },
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl PollError {
    pub fn malformed_body(message: impl Into<String>, body: &[u8]) -> Self {
        Self::MalformedBody {
            message: message.into(),
            excerpt: excerpt_text(&String::from_utf8_lossy(body)),
        }
    }

    /// Whether the user should hear about this failure through the messenger.
    ///
    /// Delivery failures are excluded: the transport that just failed is the
    /// only way to reach the user.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, PollError::Delivery(_))
    }
}
