//! Layout primitives shared by every dashboard section.

use leptos::prelude::*;

/// Rounded container for a block of related content.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <section class="card">{children()}</section> }
}

#[component]
pub fn CardHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="card__header">
            <div class="card__title">{title}</div>
            <div class="card__subtitle">{subtitle}</div>
        </div>
    }
}

/// Heading at the top of a tab section.
#[component]
pub fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-title">
            <div class="section-title__title">{title}</div>
            <div class="section-title__subtitle">{subtitle}</div>
        </div>
    }
}

/// Small label/value tile with a large value.
#[component]
pub fn MiniStat(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="mini-stat">
            <div class="mini-stat__label">{label}</div>
            <div class="mini-stat__value">{value}</div>
        </div>
    }
}

#[component]
pub fn InfoBox(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="info-box">
            <div class="info-box__label">{label}</div>
            <div class="info-box__value">{value}</div>
        </div>
    }
}
