//! Transient "Access Granted" acknowledgement shown right after login.

use leptos::prelude::*;

#[component]
pub fn AccessGranted(
    #[prop(into)] visible: Signal<bool>,
    #[prop(default = "Authorized Personnel Verified")] detail: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="access-granted" role="status">
                <div class="access-granted__icon">"✔"</div>
                <h1 class="access-granted__title">"Access Granted"</h1>
                <p class="access-granted__detail">{detail}</p>
            </div>
        </Show>
    }
}
