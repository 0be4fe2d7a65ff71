//! Theme preference initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies the
//! `.dark-mode` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates the class. The portal opens dark unless the
//! visitor switched it off before. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "cyber_alert_dark";

/// Class on `<html>` that switches the stylesheet to the dark palette.
pub const DARK_CLASS: &str = "dark-mode";

/// Root class for the server-rendered shell, so the first paint already
/// matches the default theme.
pub fn root_class(enabled: bool) -> &'static str {
    if enabled { DARK_CLASS } else { "" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` when nothing is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return true;
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(val)) => val == "true",
            _ => true,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1(DARK_CLASS);
            } else {
                let _ = class_list.remove_1(DARK_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
        log::debug!("theme switched: dark={next}");
    }
    next
}
