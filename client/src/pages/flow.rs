//! Main page: fake security scan, sign-in card, then pricing reveal.
//!
//! ARCHITECTURE
//! ============
//! The page owns the `FlowState` signal and the timer registry. Browser
//! timers only ever feed `FlowEvent`s back into `FlowState::apply`; the
//! commands it returns are executed here. Disposal of the page disposes the
//! registry, which cancels every pending timer.

use leptos::prelude::*;

use crate::components::access_granted::AccessGranted;
use crate::components::alert_overlay::AlertOverlay;
use crate::components::login_panel::LoginPanel;
use crate::components::pricing_card::PricingGrid;
use crate::components::scan_loader::ScanLoader;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::flow::{FlowCommand, FlowEvent, FlowState, Stage};
use crate::util::alerts::AlertSet;
use crate::util::timers::BrowserTimers;

/// Feed one event into the sequencer and run the resulting timer work.
fn dispatch(event: FlowEvent, flow: RwSignal<FlowState>, timers: &BrowserTimers) {
    if timers.is_disposed() {
        return;
    }
    let Some((before, commands, after)) = flow.try_update(|state| {
        let before = state.stage;
        let commands = state.apply(event);
        (before, commands, state.stage)
    }) else {
        return;
    };
    if before != after {
        #[cfg(feature = "hydrate")]
        log::debug!("stage {} -> {}", before.as_str(), after.as_str());
    }
    execute(commands, flow, timers);
}

#[cfg(feature = "hydrate")]
fn execute(commands: Vec<FlowCommand>, flow: RwSignal<FlowState>, timers: &BrowserTimers) {
    use crate::util::timers::BrowserTimer;
    use std::time::Duration;

    for command in commands {
        match command {
            FlowCommand::StartScan { period_ms } => {
                let tick_timers = timers.clone();
                match set_interval_with_handle(
                    move || dispatch(FlowEvent::ScanTick, flow, &tick_timers),
                    Duration::from_millis(u64::from(period_ms)),
                ) {
                    Ok(handle) => timers.hold_repeating(BrowserTimer::Repeating(handle)),
                    Err(e) => log::warn!("scan timer not started: {e:?}"),
                }
            }
            FlowCommand::StopScan => timers.cancel_repeating(),
            FlowCommand::Schedule { delay_ms, event } => {
                let fire_timers = timers.clone();
                match set_timeout_with_handle(
                    move || dispatch(event, flow, &fire_timers),
                    Duration::from_millis(u64::from(delay_ms)),
                ) {
                    Ok(handle) => timers.hold_one_shot(BrowserTimer::OneShot(handle)),
                    Err(e) => log::warn!("{event:?} timer not scheduled: {e:?}"),
                }
            }
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn execute(commands: Vec<FlowCommand>, flow: RwSignal<FlowState>, timers: &BrowserTimers) {
    let _ = (commands, flow, timers);
}

#[component]
pub fn FlowPage() -> impl IntoView {
    let (initial, start_commands) = FlowState::start();
    let flow = RwSignal::new(initial);
    let timers = BrowserTimers::default();

    {
        let timers = timers.clone();
        on_cleanup(move || timers.dispose());
    }

    // Timers and the alert seed only exist in the browser; effects never run
    // during SSR.
    let (alerts, set_alerts) = signal(None::<AlertSet>);
    {
        let timers = timers.clone();
        let start_commands = StoredValue::new(Some(start_commands));
        Effect::new(move || {
            if let Some(commands) = start_commands.try_update_value(Option::take).flatten() {
                execute(commands, flow, &timers);
            }
            #[cfg(feature = "hydrate")]
            set_alerts.maybe_update(|slot| {
                crate::util::alerts::ensure_generated(slot, crate::util::alerts::mount_seed)
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = set_alerts;
        });
    }

    // Memos so progress ticks do not rebuild the stage subtree.
    let stage = Memo::new(move |_| flow.with(|f| f.stage));
    let show_ack = Memo::new(move |_| flow.with(|f| f.show_ack));
    let show_pricing = Memo::new(move |_| flow.with(|f| f.show_pricing));
    let progress = Signal::derive(move || flow.with(|f| f.progress));

    let on_login = Callback::new(move |()| dispatch(FlowEvent::LoginSubmitted, flow, &timers));

    view! {
        <div class=move || format!("flow-page stage-{}", stage.get().as_str())>
            <ThemeToggle/>
            <AlertOverlay alerts stage/>
            <AccessGranted visible=show_ack/>

            <div class="flow-page__content">
                {move || match stage.get() {
                    Stage::Scanning => view! { <ScanLoader progress/> }.into_any(),
                    Stage::Login => view! { <LoginPanel on_login/> }.into_any(),
                    Stage::Dashboard => {
                        view! {
                            <div class="dashboard">
                                <div class="dashboard__heading">
                                    <h2>"System Access"</h2>
                                    <p>
                                        "Secure Portal: " <span class="dashboard__alert">"Cyber Alert"</span> " Nepal"
                                    </p>
                                </div>
                                <Show when=move || show_pricing.get()>
                                    <PricingGrid/>
                                </Show>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
