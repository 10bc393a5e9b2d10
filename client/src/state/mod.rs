//! Client-side state containers held in Leptos `RwSignal` context.

pub mod content;
pub mod session;
