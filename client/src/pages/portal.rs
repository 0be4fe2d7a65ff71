//! Security portal variant hosting the alternate login panel.
//!
//! Three static columns around the panel; a successful unlock sends the
//! visitor to the main flow.

use leptos::prelude::*;

use crate::components::alt_login_panel::AltLoginPanel;
use crate::components::theme_toggle::ThemeToggle;

const ACTIVE_THREATS: [&str; 2] = [
    "[DETECTED] Phishing origin: RU_SERVER_01",
    "[DETECTED] Credential stuffing attempt",
];
const TRAFFIC_LOG: [&str; 2] = ["Node cluster synchronized...", "RSA-4096 handshake successful..."];

#[component]
pub fn PortalPage() -> impl IntoView {
    let on_login_success = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("portal unlocked, entering main flow");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    });

    view! {
        <div class="portal-page">
            <ThemeToggle/>
            <aside class="portal-page__column">
                <h3 class="portal-page__heading">"Active Threats"</h3>
                {ACTIVE_THREATS
                    .iter()
                    .map(|line| view! { <div class="portal-page__threat">{*line}</div> })
                    .collect_view()}
            </aside>
            <main class="portal-page__center">
                <AltLoginPanel on_login_success/>
            </main>
            <aside class="portal-page__column">
                <h3 class="portal-page__heading">"Traffic Analysis"</h3>
                {TRAFFIC_LOG
                    .iter()
                    .map(|line| view! { <div class="portal-page__log">"> " {*line}</div> })
                    .collect_view()}
            </aside>
        </div>
    }
}
