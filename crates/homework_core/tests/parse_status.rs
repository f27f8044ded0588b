use std::sync::Once;

use homework_core::{parse_status, ParseError, HOMEWORK_VERDICTS};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bot_logging::initialize_for_tests);
}

#[test]
fn every_known_status_produces_its_verdict() {
    init_logging();
    for (status, verdict) in HOMEWORK_VERDICTS {
        let record = json!({"status": status, "homework_name": "sprint_7"});
        let message = parse_status(&record).expect("known status");
        assert_eq!(
            message,
            format!("Изменился статус проверки работы \"sprint_7\". {verdict}")
        );
    }
}

#[test]
fn approved_message_matches_exact_text() {
    init_logging();
    let record = json!({"status": "approved", "homework_name": "hw1", "id": 1});
    assert_eq!(
        parse_status(&record).unwrap(),
        "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn missing_status_wins_over_lookup() {
    init_logging();
    let record = json!({"homework_name": "hw1"});
    let err = parse_status(&record).unwrap_err();
    assert!(matches!(err, ParseError::MissingField { field: "status", .. }));
}

#[test]
fn missing_name_is_reported_before_unknown_status() {
    init_logging();
    let record = json!({"status": "lost"});
    let err = parse_status(&record).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingField {
            field: "homework_name",
            record: r#"{"status":"lost"}"#.to_string(),
        }
    );
}

#[test]
fn empty_name_counts_as_missing() {
    init_logging();
    let record = json!({"status": "approved", "homework_name": ""});
    let err = parse_status(&record).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingField {
            field: "homework_name",
            ..
        }
    ));
}

#[test]
fn unknown_status_reported_with_name_present() {
    init_logging();
    let record = json!({"status": "burned", "homework_name": "hw1"});
    let err = parse_status(&record).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownStatus {
            status: "burned".to_string()
        }
    );
    assert_eq!(err.to_string(), "Неожиданный статус домашней работы burned");
}

#[test]
fn non_string_status_is_unknown() {
    init_logging();
    let record = json!({"status": 3, "homework_name": "hw1"});
    assert_eq!(
        parse_status(&record).unwrap_err(),
        ParseError::UnknownStatus {
            status: "3".to_string()
        }
    );
}

#[test]
fn null_status_counts_as_missing() {
    init_logging();
    let record = json!({"status": null, "homework_name": "hw1"});
    assert!(matches!(
        parse_status(&record).unwrap_err(),
        ParseError::MissingField { field: "status", .. }
    ));
}
