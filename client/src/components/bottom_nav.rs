//! Mobile bottom navigation (hidden on wide screens by the stylesheet).

use leptos::prelude::*;

use crate::state::ui::{BOTTOM_NAV, UiState};

#[component]
pub fn BottomNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <footer class="bottom-nav">
            <div class="bottom-nav__grid">
                {BOTTOM_NAV
                    .into_iter()
                    .map(move |item| {
                        view! {
                            <button
                                class="bottom-nav__item"
                                class:bottom-nav__item--active=move || ui.with(|u| u.is_nav_active(item.target))
                                on:click=move |_| ui.update(|u| u.navigate(item.target))
                            >
                                {item.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </footer>
    }
}
