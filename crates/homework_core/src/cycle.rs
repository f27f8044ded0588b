use serde_json::Value;

use crate::error::PollError;
use crate::parse::parse_status;
use crate::validate::check_response;

/// Validates a decoded response and extracts the text for its newest record.
///
/// Returns `Ok(None)` when the response lists no homework at all.
pub fn extract_update(response: &Value) -> Result<Option<String>, PollError> {
    let homeworks = check_response(response)?;
    match homeworks.first() {
        Some(latest) => Ok(Some(parse_status(latest)?)),
        None => Ok(None),
    }
}
