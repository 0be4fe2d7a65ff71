//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the scan, login, and pricing surfaces. Flow state comes
//! in as signals and callbacks from the owning page; only `UiState` is read
//! from context.

pub mod access_granted;
pub mod alert_overlay;
pub mod alt_login_panel;
pub mod login_panel;
pub mod logo_badge;
pub mod pricing_card;
pub mod scan_loader;
pub mod theme_toggle;
