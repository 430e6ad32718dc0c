//! Dashboard page: header, the active tab's section, bottom nav, and chat.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::agent_row::AgentList;
use crate::components::bottom_nav::BottomNav;
use crate::components::card::{Card, CardHeader, SectionTitle};
use crate::components::chat_drawer::ChatDrawer;
use crate::components::decision_card::DecisionCard;
use crate::components::doc_tile::DocTile;
use crate::components::finance_panel::FinancePanel;
use crate::components::kpi_card::KpiCard;
use crate::components::top_bar::TopBar;
use crate::data;
use crate::state::ui::{Tab, UiState};

/// Single-page dashboard. Exactly one tab section is mounted at a time.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let section = move || match ui.with(|u| u.tab) {
        Tab::Overview => view! { <OverviewSection/> }.into_any(),
        Tab::Agents => view! { <AgentsSection/> }.into_any(),
        Tab::Finance => view! { <FinanceSection/> }.into_any(),
        Tab::Decisions => view! { <DecisionsSection/> }.into_any(),
        Tab::Docs => view! { <DocsSection/> }.into_any(),
        Tab::Strategy => view! { <StrategySection/> }.into_any(),
    };

    view! {
        <div class="dashboard">
            <TopBar/>
            <main class="dashboard__main">{section}</main>
            <BottomNav/>
            <ChatDrawer/>
        </div>
    }
}

#[component]
fn OverviewSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let all = data::decisions();
    let preview = data::overview_decisions(&all).to_vec();
    let summary = data::queue_summary(preview.len(), all.len());

    view! {
        <div class="section" data-tab="overview">
            <SectionTitle title="Now" subtitle="What matters right now."/>

            <div class="kpi-grid">
                {data::kpis()
                    .into_iter()
                    .map(|kpi| view! { <KpiCard kpi=kpi/> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="split">
                <Card>
                    <CardHeader title="AI Agents" subtitle="Status at a glance."/>
                    <AgentList/>
                </Card>

                <Card>
                    <CardHeader title="Finance Snapshot" subtitle="No accounting drama."/>
                    <FinancePanel/>
                </Card>
            </div>

            <Card>
                <CardHeader title="Decision Queue" subtitle="Where you earn your keep."/>
                <div class="stack">
                    {preview
                        .into_iter()
                        .map(|decision| view! { <DecisionCard decision=decision/> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="queue-footer">
                    <div class="queue-footer__summary">{summary}</div>
                    <button class="btn" on:click=move |_| ui.update(|u| u.select_tab(Tab::Decisions))>
                        "View All"
                    </button>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn AgentsSection() -> impl IntoView {
    view! {
        <div class="section" data-tab="agents">
            <SectionTitle title="AI Agents" subtitle="Health, updates, and escalation."/>
            <Card>
                <CardHeader title="Agent Status" subtitle="Tap an agent to start a focused thread."/>
                <AgentList/>
            </Card>
        </div>
    }
}

#[component]
fn FinanceSection() -> impl IntoView {
    view! {
        <div class="section" data-tab="finance">
            <SectionTitle title="Finance" subtitle="Snapshot + future defaults."/>
            <Card>
                <CardHeader title="Snapshot" subtitle="3 numbers. No spreadsheets."/>
                <FinancePanel/>
            </Card>
        </div>
    }
}

#[component]
fn DecisionsSection() -> impl IntoView {
    view! {
        <div class="section" data-tab="decisions">
            <SectionTitle title="Decisions" subtitle="Approve. Reject. Defer. Move."/>
            <Card>
                <CardHeader title="Decision Queue" subtitle="Keep it moving."/>
                <div class="stack">
                    {data::decisions()
                        .into_iter()
                        .map(|decision| view! { <DecisionCard decision=decision/> })
                        .collect::<Vec<_>>()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn DocsSection() -> impl IntoView {
    view! {
        <div class="section" data-tab="docs">
            <SectionTitle title="Docs" subtitle="Where evidence lives."/>
            <Card>
                <CardHeader title="Document Vault" subtitle="Placeholder UI (wire to your EDMS later)."/>
                <div class="doc-grid">
                    {data::doc_tiles()
                        .into_iter()
                        .map(|tile| view! { <DocTile tile=tile/> })
                        .collect::<Vec<_>>()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn StrategySection() -> impl IntoView {
    view! {
        <div class="section" data-tab="strategy">
            <SectionTitle title="Strategy" subtitle="Goals, risks, and the next 90 days."/>
            <Card>
                <CardHeader title="90-Day Focus" subtitle="Pick 3. Execute. Ignore the rest."/>
                <ul class="focus-list">
                    {data::strategy_focus()
                        .into_iter()
                        .map(|item| view! { <li class="focus-list__item">{item}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </Card>
        </div>
    }
}
