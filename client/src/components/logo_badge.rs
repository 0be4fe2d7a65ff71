//! Spinning company logo above the login card.

use leptos::prelude::*;

use crate::util::logo::{LOGO_SRC, fallback_for};

#[component]
pub fn LogoBadge() -> impl IntoView {
    let src = RwSignal::new(LOGO_SRC);

    let on_error = move |_| {
        if let Some(fallback) = fallback_for(src.get_untracked()) {
            #[cfg(feature = "hydrate")]
            log::debug!("logo failed to load, using placeholder");
            src.set(fallback);
        }
    };

    view! {
        <div class="logo-badge">
            <div class="logo-badge__spinner">
                <img class="logo-badge__img" src=move || src.get() alt="Cyber Logo" on:error=on_error/>
            </div>
        </div>
    }
}
