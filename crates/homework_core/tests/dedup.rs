use homework_core::DedupFilter;
use pretty_assertions::assert_eq;

#[test]
fn fresh_filter_lets_everything_through() {
    let filter = DedupFilter::new();
    assert!(!filter.is_repeat("A"));
    assert_eq!(filter.last(), None);
}

#[test]
fn only_immediate_repeats_are_suppressed() {
    let mut filter = DedupFilter::new();
    let mut passed = Vec::new();

    for message in ["A", "A", "B", "B", "B", "A"] {
        if !filter.is_repeat(message) {
            passed.push(message);
            filter.remember(message);
        }
    }

    assert_eq!(passed, vec!["A", "B", "A"]);
    assert_eq!(filter.last(), Some("A"));
}
