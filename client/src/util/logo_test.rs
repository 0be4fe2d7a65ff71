use super::*;

#[test]
fn primary_falls_back_to_placeholder() {
    assert_eq!(fallback_for(LOGO_SRC), Some(LOGO_FALLBACK_SRC));
}

#[test]
fn placeholder_has_no_further_fallback() {
    assert_eq!(fallback_for(LOGO_FALLBACK_SRC), None);
}

#[test]
fn unknown_source_has_no_fallback() {
    assert_eq!(fallback_for("/other.png"), None);
}
