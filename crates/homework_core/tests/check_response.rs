use homework_core::{check_response, ShapeError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn accepts_object_with_homework_list() {
    let response = json!({
        "homeworks": [{"status": "approved", "homework_name": "hw1"}],
        "current_date": 1700000000
    });

    let homeworks = check_response(&response).expect("valid shape");
    assert_eq!(homeworks.len(), 1);
}

#[test]
fn empty_homework_list_is_valid() {
    let response = json!({"homeworks": []});
    assert!(check_response(&response).expect("valid shape").is_empty());
}

#[test]
fn rejects_non_object() {
    let response = json!([{"homeworks": []}]);
    let err = check_response(&response).unwrap_err();
    assert!(matches!(err, ShapeError::NotAMapping { .. }));
}

#[test]
fn missing_key_and_wrong_type_are_distinguishable() {
    let missing = check_response(&json!({"current_date": 1})).unwrap_err();
    let wrong = check_response(&json!({"homeworks": {"status": "approved"}})).unwrap_err();

    assert_eq!(
        missing,
        ShapeError::MissingHomeworks {
            excerpt: r#"{"current_date":1}"#.to_string()
        }
    );
    assert_eq!(
        wrong,
        ShapeError::HomeworksNotASequence {
            found: "object",
            excerpt: r#"{"homeworks":{"status":"approved"}}"#.to_string(),
        }
    );
    assert_ne!(missing.to_string(), wrong.to_string());
}

#[test]
fn null_homeworks_counts_as_missing() {
    let err = check_response(&json!({"homeworks": null})).unwrap_err();
    assert_eq!(
        err,
        ShapeError::MissingHomeworks {
            excerpt: r#"{"homeworks":null}"#.to_string()
        }
    );
}

#[test]
fn wrong_type_error_quotes_the_response() {
    let err = check_response(&json!({"homeworks": "hw1"})).unwrap_err();
    assert_eq!(
        err,
        ShapeError::HomeworksNotASequence {
            found: "string",
            excerpt: r#"{"homeworks":"hw1"}"#.to_string(),
        }
    );
    assert!(err.to_string().contains(r#"{"homeworks":"hw1"}"#));
}
