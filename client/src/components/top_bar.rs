//! Sticky header with the date, mode selector, chat button, and tab strip.

use leptos::prelude::*;

use crate::state::ui::{Mode, Tab, UiState};
use crate::util::clock;

/// Top bar for the dashboard page.
///
/// The date label is filled in on the client after mount so server and
/// hydrated markup agree.
#[component]
pub fn TopBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let date_label = RwSignal::new(String::new());
    Effect::new(move || date_label.set(clock::now_label()));

    let open_chat = move |_| ui.update(UiState::open_chat);

    view! {
        <header class="top-bar">
            <div class="top-bar__inner">
                <div class="top-bar__row">
                    <div class="top-bar__heading">
                        <div class="top-bar__date">{move || date_label.get()}</div>
                        <div class="top-bar__title">"CEO Dashboard"</div>
                    </div>

                    <div class="top-bar__actions">
                        <ModePill/>
                        <button class="btn" on:click=open_chat>
                            "Talk to Bobby"
                        </button>
                    </div>
                </div>

                <TabStrip/>
            </div>
        </header>
    }
}

/// Three mutually exclusive mode buttons.
#[component]
pub fn ModePill() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="mode-pill">
            {Mode::ALL
                .into_iter()
                .map(move |mode| {
                    view! {
                        <button
                            class="mode-pill__option"
                            class:mode-pill__option--active=move || ui.with(|u| u.mode == mode)
                            on:click=move |_| ui.update(|u| u.select_mode(mode))
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Horizontally scrolling tab chips.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tab-strip">
            {Tab::ALL
                .into_iter()
                .map(move |tab| {
                    view! {
                        <button
                            class="tab-strip__chip"
                            class:tab-strip__chip--active=move || ui.with(|u| u.tab == tab)
                            on:click=move |_| ui.update(|u| u.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
