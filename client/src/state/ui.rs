//! Local UI chrome state (theme, password visibility).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the flow sequencer so flipping the theme
//! can never disturb stage, progress, or pending timers.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub show_password: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true, show_password: false }
    }
}

impl UiState {
    /// Input `type` for the password field.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }
}
