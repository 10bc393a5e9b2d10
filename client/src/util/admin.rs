//! Admin credential persistence: `localStorage` keys plus the `adminToken`
//! cookie the backend reads on admin requests.

use content::{AdminSession, StorageError};

use crate::util::storage::BrowserStorage;

/// Persist the admin session and set its cookie.
pub fn store_admin_session(session: &AdminSession) -> Result<(), StorageError> {
    set_cookie(&session.cookie());
    session.persist(&mut BrowserStorage)
}

/// Previously stored admin session, if complete and readable.
pub fn load_admin_session() -> Option<AdminSession> {
    match AdminSession::load(&BrowserStorage) {
        Ok(session) => session,
        Err(err) => {
            log::warn!("admin session unreadable: {err}");
            None
        }
    }
}

pub fn clear_admin_session() {
    set_cookie(&AdminSession::expired_cookie());
    if let Err(err) = AdminSession::clear(&mut BrowserStorage) {
        log::warn!("admin session not cleared: {err}");
    }
}

fn set_cookie(assignment: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        if let Some(document) = document {
            if let Err(err) = document.set_cookie(assignment) {
                log::warn!("cookie not set: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = assignment;
    }
}
