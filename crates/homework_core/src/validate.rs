use serde_json::Value;

use crate::error::{excerpt, ShapeError};

/// Checks that `response` is an object whose `homeworks` entry is an array.
///
/// A `null` entry counts as absent. An empty array passes; deciding what "nothing to report" means is up to
/// the caller.
pub fn check_response(response: &Value) -> Result<&[Value], ShapeError> {
    let map = response.as_object().ok_or_else(|| ShapeError::NotAMapping {
        excerpt: excerpt(response),
    })?;
    let homeworks = map
        .get("homeworks")
        .filter(|value| !value.is_null())
        .ok_or_else(|| ShapeError::MissingHomeworks {
            excerpt: excerpt(response),
        })?;
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ShapeError::HomeworksNotASequence {
            found: json_kind(homeworks),
            excerpt: excerpt(response),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
