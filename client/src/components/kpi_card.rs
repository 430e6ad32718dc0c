//! Headline metric card.

use leptos::prelude::*;

use crate::data::Kpi;

#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-card__top">
                <div class="kpi-card__label">{kpi.label}</div>
                <div class="kpi-card__trend">{kpi.trend}</div>
            </div>
            <div class="kpi-card__value">
                {kpi.value}
                <span class="kpi-card__suffix">{kpi.suffix}</span>
            </div>
            <div class="kpi-card__note">{kpi.note}</div>
        </div>
    }
}
