//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM lookup, `Intl` formatting)
//! from component logic so the rest of the crate builds and tests natively.

pub mod clock;
pub mod mount;
