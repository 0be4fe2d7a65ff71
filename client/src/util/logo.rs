//! Logo asset with a one-shot fallback source.

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

pub const LOGO_SRC: &str = "/cyber.jpeg";
pub const LOGO_FALLBACK_SRC: &str = "https://via.placeholder.com/150?text=CYBER";

/// Source to switch to after `current` failed to load.
///
/// Only the primary source has a fallback, so a broken placeholder cannot
/// cause an error/reload loop.
pub fn fallback_for(current: &str) -> Option<&'static str> {
    (current == LOGO_SRC).then_some(LOGO_FALLBACK_SRC)
}
