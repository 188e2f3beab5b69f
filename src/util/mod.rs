//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (rules, dates, chart config, shake frames) sit next to `dom`,
//! which wraps the handful of direct web-sys reads and writes.

pub mod age;
pub mod chart;
pub mod dom;
pub mod family;
pub mod fields;
pub mod rules;
pub mod shake;
