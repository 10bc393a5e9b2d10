//! Route guards shared by the admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both admin routes apply identical redirect behavior, so the check and the
//! redirect effect live here rather than in each page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use content::{RouteDecision, authorize};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::config::ADMIN_HASH;

/// Decision for an admin URL carrying `hash`, against the configured secret.
pub fn admin_decision(hash: Option<&str>) -> RouteDecision {
    authorize(hash, ADMIN_HASH)
}

/// `/admin/{hash}` and `/admin/{hash}/login` for the current segment.
pub fn admin_paths(hash: &str) -> (String, String) {
    (format!("/admin/{hash}"), format!("/admin/{hash}/login"))
}

/// Redirect away whenever the admin segment stops matching the secret.
///
/// Reactive on `hash`, so editing the URL in place re-runs the check.
pub fn install_admin_redirect<H, F>(hash: H, navigate: F)
where
    H: Fn() -> Option<String> + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let RouteDecision::Redirect(to) = admin_decision(hash().as_deref()) {
            log::warn!("admin route refused");
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
