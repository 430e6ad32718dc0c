//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::state::{chat::ChatState, ui::UiState};
use crate::util::mount::MOUNT_ID;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `App` is wrapped in the mount container the WASM entry hydrates from.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <div id=MOUNT_ID>
                    <App/>
                </div>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI and chat state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Both signals are recreated on every load; nothing is persisted.
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(ui);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/ceo-dashboard.css"/>
        <Title text="CEO Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
