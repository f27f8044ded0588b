use serde_json::Value;

use crate::error::{excerpt, ParseError};
use crate::verdict::verdict_for;

/// Builds the notification text for one homework record.
///
/// Both fields are checked for presence before the status is looked up, so a
/// record missing `homework_name` reports that rather than an odd status.
pub fn parse_status(record: &Value) -> Result<String, ParseError> {
    let status = record
        .get("status")
        .filter(|value| !value.is_null())
        .ok_or_else(|| missing("status", record))?;
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| missing("homework_name", record))?;

    let verdict = status
        .as_str()
        .and_then(verdict_for)
        .ok_or_else(|| ParseError::UnknownStatus {
            status: status
                .as_str()
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| status.to_string()),
        })?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

fn missing(field: &'static str, record: &Value) -> ParseError {
    ParseError::MissingField {
        field,
        record: excerpt(record),
    }
}
