//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<SessionState>` is provided by `App`; the navbar, the
//! login page and logout buttons all read and write through it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use content::SessionStore;

use crate::util::storage::BrowserStorage;

pub type SessionState = SessionStore<BrowserStorage>;

/// Build the session state from `localStorage`.
///
/// Unreadable or partial data leaves the user logged out.
pub fn restore_session() -> SessionState {
    let mut session = SessionStore::new(BrowserStorage);
    match session.rehydrate() {
        Ok(true) => log::info!("session restored"),
        Ok(false) => {}
        Err(err) => log::warn!("session not restored: {err}"),
    }
    session
}

/// Navbar greeting for the logged-in user, if any.
pub fn greeting(session: &SessionState) -> Option<String> {
    session
        .identity()
        .map(|identity| format!("{} · {}", identity.display_name(), identity.role.label()))
}
