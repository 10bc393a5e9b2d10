//! Fetch lifecycle and stale-response protection.
//!
//! DESIGN
//! ======
//! Each view that loads remote data owns a [`FetchState`] slice
//! (`Idle -> Loading -> Success | Error`) and a [`RequestGuard`]. The guard
//! hands out a ticket per request; a completion is applied only if its
//! ticket is still the latest and the owning view has not been torn down.
//! Independent views use independent guards, so concurrent fetches can
//! finish in any order without clobbering each other.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::envelope::FetchError;

/// Load status of one remote resource.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    /// User-facing failure message. Stays until the fetch is triggered again.
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    /// Enter `Loading`, discarding any previous outcome.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Settle into `Success` or `Error`.
    pub fn finish(&mut self, result: Result<T, FetchError>) {
        *self = Self::from(result);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

/// Identifies one request issued through a [`RequestGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
struct GuardInner {
    latest: AtomicU64,
    cancelled: AtomicBool,
}

/// Shared handle deciding whether a late completion may still be applied.
///
/// Cloning yields another handle to the same guard, so the task awaiting
/// the response and the view's cleanup hook can each hold one.
#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    inner: Arc<GuardInner>,
}

impl RequestGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    #[must_use]
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.inner.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Reject every outstanding and future completion. Called on teardown.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Whether a completion for `ticket` should update state.
    #[must_use]
    pub fn accepts(&self, ticket: RequestTicket) -> bool {
        !self.is_cancelled() && self.inner.latest.load(Ordering::Acquire) == ticket.0
    }
}
