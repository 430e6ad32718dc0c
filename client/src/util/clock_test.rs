#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_label_is_empty_outside_browser() {
    assert!(now_label().is_empty());
}

#[test]
fn format_options_cover_date_and_time() {
    let keys: Vec<_> = FORMAT_OPTIONS.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["weekday", "month", "day", "year", "hour", "minute"]);
}
