use super::*;

// =============================================================
// validate_alt_credentials
// =============================================================

#[test]
fn validate_accepts_padded_fields() {
    assert!(validate_alt_credentials("  agent-7 ", " hunter2 "));
    assert!(validate_alt_credentials("a", "b"));
}

#[test]
fn validate_rejects_blank_fields() {
    assert!(!validate_alt_credentials("", ""));
    assert!(!validate_alt_credentials("   ", "\t"));
    assert!(!validate_alt_credentials("agent-7", "  "));
    assert!(!validate_alt_credentials(" ", "hunter2"));
}

// =============================================================
// AltLoginState
// =============================================================

#[test]
fn blank_submit_leaves_success_false() {
    let mut state = AltLoginState::default();
    assert!(!state.submit("  ", "  "));
    assert!(!state.success);
    assert!(!state.take_notification());
}

#[test]
fn any_non_blank_submit_succeeds() {
    let mut state = AltLoginState::default();
    assert!(state.submit("anyone", "anything"));
    assert!(state.success);
}

#[test]
fn only_first_success_schedules_callback() {
    let mut state = AltLoginState::default();
    assert!(state.submit("a", "b"));
    assert!(!state.submit("c", "d"));
    assert!(state.success);
}

#[test]
fn notification_is_taken_at_most_once() {
    let mut state = AltLoginState::default();
    state.submit("a", "b");
    assert!(state.take_notification());
    assert!(!state.take_notification());
}

#[test]
fn delay_is_positive() {
    assert!(ALT_SUCCESS_DELAY_MS > 0);
}
