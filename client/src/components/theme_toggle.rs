//! Fixed-position dark/light switch, available at every stage.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            title="Toggle dark mode"
            on:click=move |_| {
                let current = ui.get_untracked().dark_mode;
                let next = crate::util::dark_mode::toggle(current);
                ui.update(|u| u.dark_mode = next);
            }
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
