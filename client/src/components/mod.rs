//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and mock records while reading/writing
//! shared state from Leptos context providers.

pub mod agent_row;
pub mod bottom_nav;
pub mod card;
pub mod chat_drawer;
pub mod decision_card;
pub mod doc_tile;
pub mod finance_panel;
pub mod kpi_card;
pub mod top_bar;
