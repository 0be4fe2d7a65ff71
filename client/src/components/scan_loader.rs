//! Scan card: step log, percentage label, and progress bar.

use leptos::prelude::*;

use crate::util::scan_log;

#[component]
pub fn ScanLoader(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    let log = RwSignal::new(Vec::<&'static str>::new());

    Effect::new(move || {
        let value = progress.get();
        let mut next = log.get_untracked();
        if scan_log::advance(&mut next, value) {
            log.set(next);
        }
    });

    view! {
        <div class="scan-card">
            <div class="scan-loader">
                <div class="scan-loader__log">
                    <For each=move || log.get() key=|line| *line let:line>
                        <div class="scan-loader__line">"> " {line}</div>
                    </For>
                </div>
                <div class="scan-loader__header">
                    <span>"Authorization_Scan"</span>
                    <span>{move || scan_log::percent_label(progress.get())}</span>
                </div>
                <div class="scan-loader__track">
                    <div class="scan-loader__bar" style=move || format!("width: {}%;", progress.get())></div>
                </div>
            </div>
            <div class="scan-card__status">
                <span class="scan-card__ping"></span>
                <span>"Scanning for vulnerabilities..."</span>
            </div>
        </div>
    }
}
