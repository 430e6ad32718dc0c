//! Decision queue card.
//!
//! Approve/Reject/Defer and "Discuss with Bobby" are placeholders; decisions
//! are never mutated or persisted.

use leptos::prelude::*;

use crate::data::Decision;

#[component]
pub fn DecisionCard(decision: Decision) -> impl IntoView {
    let risk_class = format!(
        "decision-card__risk decision-card__risk--{}",
        decision.risk.label().to_ascii_lowercase()
    );

    view! {
        <div class="decision-card" data-decision-id=decision.id.to_string()>
            <div class="decision-card__top">
                <div class="decision-card__heading">
                    <div class="decision-card__title">{decision.title}</div>
                    <div class="decision-card__context">{decision.context}</div>
                </div>
                <span class=risk_class>{decision.risk.label()}</span>
            </div>

            <div class="decision-card__rec">
                <span class="decision-card__rec-label">"AI Rec:"</span>
                " "
                {decision.recommendation}
            </div>

            <div class="decision-card__actions">
                <ActionButton label="Approve"/>
                <ActionButton label="Reject"/>
                <ActionButton label="Defer"/>
            </div>

            <button class="btn btn--block decision-card__discuss">"Discuss with Bobby"</button>
        </div>
    }
}

#[component]
fn ActionButton(label: &'static str) -> impl IntoView {
    view! { <button class="btn decision-card__action">{label}</button> }
}
