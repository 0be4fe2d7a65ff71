//! Floating "Sign In Required" card of the main flow.
//!
//! Both inputs are `required`, so the browser blocks empty submits; the
//! handler repeats that check and otherwise reports success unconditionally.

use leptos::prelude::*;

use crate::components::logo_badge::LogoBadge;
use crate::state::flow::login_accepts;
use crate::state::ui::UiState;

#[component]
pub fn LoginPanel(on_login: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !email.with_untracked(|e| password.with_untracked(|p| login_accepts(e, p))) {
            return;
        }
        on_login.run(());
    };

    view! {
        <div class="login-card">
            <LogoBadge/>
            <div class="login-card__heading">
                <div class="login-card__shield">"⚠"</div>
                <h2>"Sign In Required"</h2>
                <p class="login-card__subtitle">"Secure Access Portal"</p>
            </div>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    required=true
                    placeholder="Security ID"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <div class="login-form__password">
                    <input
                        class="login-input"
                        type=move || ui.get().password_input_type()
                        required=true
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-form__reveal"
                        type="button"
                        title="Show password"
                        on:click=move |_| ui.update(|u| u.show_password = !u.show_password)
                    >
                        {move || if ui.get().show_password { "◡" } else { "◉" }}
                    </button>
                </div>
                <button class="login-button" type="submit">
                    "Sign In"
                </button>
            </form>
        </div>
    }
}
