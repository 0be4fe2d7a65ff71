//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{flow::FlowPage, portal::PortalPage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=dark_mode::root_class(dark_mode::read_preference())>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Stored preference wins over the dark default once the browser is up.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/cyber-alert.css"/>
        <Title text="Cyber Alert Nepal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FlowPage/>
                <Route path=StaticSegment("portal") view=PortalPage/>
            </Routes>
        </Router>
    }
}
