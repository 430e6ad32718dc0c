//! Agent status rows.

use leptos::prelude::*;

use crate::data::{self, Agent};
use crate::state::ui::UiState;

/// One agent with its status badge. Tapping the row opens the chat drawer.
#[component]
pub fn AgentRow(agent: Agent) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let badge_class = format!("agent-row__status agent-row__status--{}", agent.status.modifier());

    view! {
        <button class="agent-row" on:click=move |_| ui.update(UiState::open_chat)>
            <div class="agent-row__top">
                <div class="agent-row__identity">
                    <div class="agent-row__name-line">
                        <div class="agent-row__name">{agent.name}</div>
                        <span class=badge_class>{agent.status.label()}</span>
                    </div>
                    <div class="agent-row__role">{agent.role}</div>
                </div>
                <div class="agent-row__last">{agent.last}</div>
            </div>
            <div class="agent-row__summary">{agent.summary}</div>
        </button>
    }
}

/// Every mock agent, stacked.
#[component]
pub fn AgentList() -> impl IntoView {
    view! {
        <div class="stack">
            {data::agents()
                .into_iter()
                .map(|agent| view! { <AgentRow agent=agent/> })
                .collect::<Vec<_>>()}
        </div>
    }
}
