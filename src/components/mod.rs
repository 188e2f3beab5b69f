//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual form controls, the repeating family
//! sub-forms and the statistics charts, reading and writing shared state from
//! Leptos context providers.

pub mod form_field;
pub mod repeating_group;
pub mod stats_chart;
