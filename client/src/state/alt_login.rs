//! Success flag for the alternate login panel.
//!
//! The panel accepts any pair of non-blank values, shows a short
//! acknowledgement, and notifies its host once after a fixed delay.

#[cfg(test)]
#[path = "alt_login_test.rs"]
mod alt_login_test;

/// Delay between a successful submit and the host's success callback.
pub const ALT_SUCCESS_DELAY_MS: u32 = 1200;

/// Both fields must be non-blank after trimming.
pub fn validate_alt_credentials(access_id: &str, passphrase: &str) -> bool {
    !access_id.trim().is_empty() && !passphrase.trim().is_empty()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AltLoginState {
    pub success: bool,
    notified: bool,
}

impl AltLoginState {
    /// Record a submit. Returns `true` when this submit should schedule the
    /// success callback: the first valid one only.
    pub fn submit(&mut self, access_id: &str, passphrase: &str) -> bool {
        if self.success || !validate_alt_credentials(access_id, passphrase) {
            return false;
        }
        self.success = true;
        true
    }

    /// Claim the single success notification. Returns `true` at most once,
    /// and only after a successful submit.
    pub fn take_notification(&mut self) -> bool {
        if !self.success || self.notified {
            return false;
        }
        self.notified = true;
        true
    }
}
