//! Finance snapshot body: three stats, burn/next expense, and the AI note.

use leptos::prelude::*;

use crate::components::card::{InfoBox, MiniStat};
use crate::data;
use crate::state::ui::UiState;

/// Finance numbers with a note that follows the current mode.
#[component]
pub fn FinancePanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Numbers are mode-independent; only the note is reactive.
    let snapshot = data::finance(ui.get_untracked().mode);
    let note = move || data::finance(ui.with(|u| u.mode)).note;

    view! {
        <div class="finance-panel">
            <div class="finance-panel__stats">
                <MiniStat label="Cash In" value=snapshot.cash_in/>
                <MiniStat label="Cash Out" value=snapshot.cash_out/>
                <MiniStat label="Net" value=snapshot.net/>
            </div>

            <div class="finance-panel__info">
                <InfoBox label="Burn Rate" value=snapshot.burn/>
                <InfoBox label="Next Big Expense" value=snapshot.next_big/>
            </div>

            <div class="finance-panel__note">
                <span class="finance-panel__note-label">"AI Note:"</span>
                " "
                {note}
            </div>
        </div>
    }
}
