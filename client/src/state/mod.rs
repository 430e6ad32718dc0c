//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome vs `chat` transcript) so the
//! drawer's open flag can change without touching message history.

pub mod chat;
pub mod ui;
