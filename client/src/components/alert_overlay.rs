//! Background layer of decorative threat badges.
//!
//! SYSTEM CONTEXT
//! ==============
//! The badge set is handed in already generated; this component only fades
//! the whole layer per stage and theme and never rebuilds individual badges.

use leptos::prelude::*;

use crate::state::flow::Stage;
use crate::state::ui::UiState;
use crate::util::alerts::{AlertSet, overlay_opacity};

#[component]
pub fn AlertOverlay(
    /// Set generated once at page mount; `None` until the browser has seeded it.
    alerts: ReadSignal<Option<AlertSet>>,
    #[prop(into)] stage: Signal<Stage>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let opacity = move || overlay_opacity(stage.get(), ui.get().dark_mode);

    view! {
        <Show when=move || opacity().is_some()>
            <div
                class="alert-overlay"
                style=move || format!("opacity: {};", opacity().unwrap_or(0.0))
            >
                {move || {
                    alerts
                        .get()
                        .map(|set| {
                            set.records()
                                .iter()
                                .map(|record| {
                                    let class = if record.critical {
                                        "alert-badge alert-badge--critical"
                                    } else {
                                        "alert-badge"
                                    };
                                    view! {
                                        <div class=class style=record.style()>
                                            {record.label()}
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
        </Show>
    }
}
