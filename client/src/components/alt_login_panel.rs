//! Alternate login panel with its own success flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Not part of the main scan flow. A host passes `on_login_success`; the
//! panel calls it once, `delay_ms` after the first submit with two non-blank
//! fields, and never after it has been unmounted.

use leptos::prelude::*;

use crate::state::alt_login::{ALT_SUCCESS_DELAY_MS, AltLoginState};

#[component]
pub fn AltLoginPanel(
    on_login_success: Callback<()>,
    #[prop(default = ALT_SUCCESS_DELAY_MS)] delay_ms: u32,
) -> impl IntoView {
    let state = RwSignal::new(AltLoginState::default());
    let access_id = RwSignal::new(String::new());
    let passphrase = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = access_id.get_untracked();
        let pass = passphrase.get_untracked();
        let Some(scheduled) = state.try_update(|s| s.submit(&id, &pass)) else {
            return;
        };
        if !scheduled {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                if state.try_update(AltLoginState::take_notification) == Some(true) {
                    on_login_success.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, on_login_success);
        }
    };

    view! {
        <div class="alt-login">
            <div class="alt-login__lock">"🔒"</div>
            <h2 class="alt-login__title">"Identity Verification"</h2>
            <Show
                when=move || state.get().success
                fallback=move || {
                    view! {
                        <form class="alt-login__form" on:submit=on_submit.clone()>
                            <input
                                class="alt-login__input"
                                type="text"
                                placeholder="SECURE_ACCESS_ID"
                                prop:value=move || access_id.get()
                                on:input=move |ev| access_id.set(event_target_value(&ev))
                            />
                            <input
                                class="alt-login__input"
                                type="password"
                                placeholder="PASSPHRASE"
                                prop:value=move || passphrase.get()
                                on:input=move |ev| passphrase.set(event_target_value(&ev))
                            />
                            <button class="alt-login__button" type="submit">
                                "UNLOCK PRICING"
                            </button>
                        </form>
                    }
                }
            >
                <p class="alt-login__granted">"Identity confirmed. Unlocking..."</p>
            </Show>
        </div>
    }
}
