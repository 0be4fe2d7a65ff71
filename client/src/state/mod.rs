//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `flow` holds the stage sequencer owned by the main page, `alt_login` the
//! self-contained flag of the portal's login panel, and `ui` the presentation
//! toggles shared through context.

pub mod alt_login;
pub mod flow;
pub mod ui;
