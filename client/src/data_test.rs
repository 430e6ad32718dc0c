use super::*;

// =============================================================
// Literal records
// =============================================================

#[test]
fn kpis_have_six_unique_labels() {
    let list = kpis();
    assert_eq!(list.len(), 6);
    let mut labels: Vec<_> = list.iter().map(|k| k.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 6);
}

#[test]
fn cash_runway_kpi_carries_suffix() {
    let runway = kpis().into_iter().find(|k| k.label == "Cash Runway").expect("runway kpi");
    assert_eq!(runway.value, "4.2");
    assert_eq!(runway.suffix, "mo");
}

#[test]
fn agents_cover_every_status() {
    let list = agents();
    assert_eq!(list.len(), 4);
    for status in [AgentStatus::Stable, AgentStatus::NeedsInput, AgentStatus::Blocked] {
        assert!(list.iter().any(|a| a.status == status), "missing {status:?}");
    }
}

#[test]
fn agent_status_labels_and_modifiers() {
    assert_eq!(AgentStatus::Stable.label(), "Stable");
    assert_eq!(AgentStatus::NeedsInput.label(), "Needs Input");
    assert_eq!(AgentStatus::Blocked.label(), "Blocked");
    assert_eq!(AgentStatus::NeedsInput.modifier(), "needs-input");
}

#[test]
fn decision_ids_are_sequential() {
    let ids: Vec<_> = decisions().iter().map(|d| d.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
fn risk_labels() {
    assert_eq!(Risk::Low.label(), "Low");
    assert_eq!(Risk::Medium.label(), "Medium");
    assert_eq!(Risk::High.label(), "High");
}

// =============================================================
// Mode-dependent finance note
// =============================================================

#[test]
fn finance_note_in_crisis() {
    assert_eq!(finance(Mode::Crisis).note, "Cut non-essential subs now.");
}

#[test]
fn finance_note_outside_crisis() {
    assert_eq!(finance(Mode::Focus).note, "You’re fine. Keep shipping.");
    assert_eq!(finance(Mode::Review).note, finance(Mode::Focus).note);
}

#[test]
fn finance_numbers_do_not_depend_on_mode() {
    let calm = finance(Mode::Focus);
    let crisis = finance(Mode::Crisis);
    assert_eq!(calm.net, crisis.net);
    assert_eq!(calm.burn, crisis.burn);
}

// =============================================================
// Overview preview
// =============================================================

#[test]
fn overview_shows_first_three_decisions() {
    let all = decisions();
    let shown = overview_decisions(&all);
    assert_eq!(shown.len(), 3);
    assert_eq!(shown[0].id, 1);
    assert_eq!(shown[2].id, 3);
    assert_eq!(queue_summary(shown.len(), all.len()), "Showing 3 of 5");
}

#[test]
fn overview_handles_short_queue() {
    let all = decisions();
    assert_eq!(overview_decisions(&all[..2]).len(), 2);
    assert!(overview_decisions(&[]).is_empty());
}

#[test]
fn supplementary_tabs_have_content() {
    assert_eq!(doc_tiles().len(), 4);
    assert!(strategy_focus().iter().all(|s| !s.is_empty()));
}
