//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and static page content from
//! page and component logic so they can be unit tested without a DOM.

pub mod alerts;
pub mod dark_mode;
pub mod logo;
pub mod pricing;
pub mod scan_log;
pub mod timers;
