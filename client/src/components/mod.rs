//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and listing surfaces while reading or
//! writing shared state from Leptos context providers.

pub mod content_card;
pub mod content_list;
pub mod form_field;
pub mod navbar;
pub mod role_picker;
