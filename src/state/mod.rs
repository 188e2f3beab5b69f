//! Client state models.
//!
//! DESIGN
//! ======
//! Each model is plain data with methods and is wrapped in an `RwSignal` by
//! the page that owns it. Nothing here reads the DOM, so every transition is
//! unit-tested natively.

pub mod groups;
pub mod layout;
pub mod submission;
pub mod validation;
