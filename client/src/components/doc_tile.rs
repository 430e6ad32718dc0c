//! Document vault tile. "Open" is a placeholder.

use leptos::prelude::*;

use crate::data::DocTile as DocTileData;

#[component]
pub fn DocTile(tile: DocTileData) -> impl IntoView {
    view! {
        <div class="doc-tile">
            <div class="doc-tile__title">{tile.title}</div>
            <div class="doc-tile__desc">{tile.description}</div>
            <button class="btn doc-tile__open">"Open"</button>
        </div>
    }
}
