//! Admin route guard.
//!
//! SECURITY
//! ========
//! This is a shared-secret URL segment compared against a value baked in
//! at build time. It hides the admin pages; it does not authenticate
//! anyone. Real authorization has to happen server-side on the admin API.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Route used for every rejected admin access.
pub const HOME_ROUTE: &str = "/";

/// Outcome of [`authorize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

impl RouteDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Allow iff `segment` is present and byte-equal to a non-empty `secret`.
/// No trimming, no case folding.
#[must_use]
pub fn authorize(segment: Option<&str>, secret: Option<&str>) -> RouteDecision {
    match (segment, secret) {
        (Some(segment), Some(secret)) if !secret.is_empty() && segment == secret => RouteDecision::Allow,
        _ => RouteDecision::Redirect(HOME_ROUTE),
    }
}
