//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the domain rules stay testable off the browser.

pub mod admin;
pub mod config;
pub mod guard;
pub mod storage;
