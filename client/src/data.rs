//! Hardcoded dashboard records.
//!
//! Everything here is literal mock data recreated on each page load; nothing
//! is fetched or persisted.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::state::ui::Mode;

/// Number of decisions previewed on the Overview tab.
pub const OVERVIEW_DECISION_COUNT: usize = 3;

/// Headline metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub suffix: &'static str,
    pub trend: &'static str,
    pub note: &'static str,
}

/// Agent health as shown on the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    Stable,
    NeedsInput,
    Blocked,
}

impl AgentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Stable => "Stable",
            AgentStatus::NeedsInput => "Needs Input",
            AgentStatus::Blocked => "Blocked",
        }
    }

    /// BEM modifier for the badge.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            AgentStatus::Stable => "stable",
            AgentStatus::NeedsInput => "needs-input",
            AgentStatus::Blocked => "blocked",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub status: AgentStatus,
    /// Age of the last update, already formatted ("3m", "1h").
    pub last: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinanceSnapshot {
    pub cash_in: &'static str,
    pub cash_out: &'static str,
    pub net: &'static str,
    pub burn: &'static str,
    pub next_big: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Medium => "Medium",
            Risk::High => "High",
        }
    }
}

/// A pending choice in the decision queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub id: u32,
    pub title: &'static str,
    pub context: &'static str,
    pub risk: Risk,
    pub recommendation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocTile {
    pub title: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn kpis() -> Vec<Kpi> {
    vec![
        Kpi { label: "Cash Runway", value: "4.2", suffix: "mo", trend: "▲", note: "Stable burn rate" },
        Kpi { label: "Active Projects", value: "7", suffix: "", trend: "—", note: "2 near shipping" },
        Kpi { label: "Agent Health", value: "92", suffix: "%", trend: "▲", note: "1 needs input" },
        Kpi { label: "Revenue (MTD)", value: "₱128k", suffix: "", trend: "▲", note: "Up vs last month" },
        Kpi { label: "Critical Risks", value: "1", suffix: "", trend: "▼", note: "Aging decision" },
        Kpi { label: "Open Decisions", value: "5", suffix: "", trend: "▲", note: "3 low effort" },
    ]
}

#[must_use]
pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            name: "Bobby",
            role: "Chief-of-Staff",
            status: AgentStatus::Stable,
            last: "3m",
            summary: "Monitoring projects + weekly brief ready.",
        },
        Agent {
            name: "Anne",
            role: "Finance Lead",
            status: AgentStatus::NeedsInput,
            last: "19m",
            summary: "Bills scan pending; needs access confirmation.",
        },
        Agent {
            name: "Hunter",
            role: "Comms/Leads",
            status: AgentStatus::Stable,
            last: "41m",
            summary: "Lead capture pipeline OK; follow-ups queued.",
        },
        Agent {
            name: "Vince",
            role: "DevOps/Infra",
            status: AgentStatus::Blocked,
            last: "1h",
            summary: "Deploy key missing for prod environment.",
        },
    ]
}

/// Finance numbers plus the note for the current mode.
#[must_use]
pub fn finance(mode: Mode) -> FinanceSnapshot {
    FinanceSnapshot {
        cash_in: "₱156k",
        cash_out: "₱92k",
        net: "₱64k",
        burn: "₱3.1k/day",
        next_big: "Relevance AI / OpenAI subs",
        note: if mode == Mode::Crisis {
            "Cut non-essential subs now."
        } else {
            "You’re fine. Keep shipping."
        },
    }
}

#[must_use]
pub fn decisions() -> Vec<Decision> {
    vec![
        Decision {
            id: 1,
            title: "Launch CEO Dashboard v1",
            context: "Ship UI + Bobby chat first; data later.",
            risk: Risk::Medium,
            recommendation: "Approve and timebox to 7 days.",
        },
        Decision {
            id: 2,
            title: "Slack vs Telegram for Bobby",
            context: "You want fast, human-style chat.",
            risk: Risk::Low,
            recommendation: "Telegram for speed; Slack for org teams.",
        },
        Decision {
            id: 3,
            title: "Centralize logs (Firebase vs Sheets)",
            context: "Avoid split-brain reporting.",
            risk: Risk::High,
            recommendation: "Use Firebase as source of truth; mirror to Sheets.",
        },
        Decision {
            id: 4,
            title: "Agent escalation rules",
            context: "Stop noise, surface only CEO-level alerts.",
            risk: Risk::Medium,
            recommendation: "Define 3 alert severities + daily digest.",
        },
        Decision {
            id: 5,
            title: "Subscription pricing for Tracker",
            context: "Value is saved admin hours + compliance logs.",
            risk: Risk::Low,
            recommendation: "Start ₱1,500/mo base; upsell add-ons.",
        },
    ]
}

/// The slice of the queue previewed on the Overview tab.
#[must_use]
pub fn overview_decisions(all: &[Decision]) -> &[Decision] {
    &all[..all.len().min(OVERVIEW_DECISION_COUNT)]
}

#[must_use]
pub fn queue_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total}")
}

#[must_use]
pub fn doc_tiles() -> Vec<DocTile> {
    vec![
        DocTile { title: "Memos", description: "Decisions, directives, IOMs." },
        DocTile { title: "Reports", description: "Weekly, monthly, agent digests." },
        DocTile { title: "Contracts", description: "Clients, vendors, subscriptions." },
        DocTile { title: "Templates", description: "Reusable formats & SOPs." },
    ]
}

/// The three 90-day focus items on the Strategy tab.
#[must_use]
pub fn strategy_focus() -> [&'static str; 3] {
    [
        "Ship CEO Dashboard v1 (UI + Bobby chat + basic logs)",
        "Standardize agent reporting format + escalation rules",
        "Monetize 1 product hard (Tracker or Land Calculator module)",
    ]
}
