/// Review status codes and the text sent to the user for each.
pub const HOMEWORK_VERDICTS: [(&str, &str); 3] = [
    (
        "approved",
        "Работа проверена: ревьюеру всё понравилось. Ура!",
    ),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

pub fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_resolve() {
        for (code, verdict) in HOMEWORK_VERDICTS {
            assert_eq!(verdict_for(code), Some(verdict));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(verdict_for("APPROVED"), None);
        assert_eq!(verdict_for(""), None);
    }
}
