//! Admin dashboard session.
//!
//! The admin login response is kept apart from the patient/doctor/clinic
//! session: it lives under `adminEmail`/`adminToken` in durable storage and
//! is mirrored into an `adminToken` cookie readable by page scripts.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::session::{SessionStorage, StorageError, remove_all, write_all};

pub const ADMIN_EMAIL_KEY: &str = "adminEmail";
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const ADMIN_COOKIE: &str = "adminToken";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSession {
    pub email: String,
    pub token: String,
}

impl AdminSession {
    /// Write both admin keys.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure after attempting both writes.
    pub fn persist<S: SessionStorage>(&self, storage: &mut S) -> Result<(), StorageError> {
        write_all(storage, &[(ADMIN_EMAIL_KEY, self.email.as_str()), (ADMIN_TOKEN_KEY, self.token.as_str())])
    }

    /// Load the admin session; `None` unless both keys are present.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn load<S: SessionStorage>(storage: &S) -> Result<Option<Self>, StorageError> {
        let email = storage.get(ADMIN_EMAIL_KEY)?;
        let token = storage.get(ADMIN_TOKEN_KEY)?;
        Ok(email.zip(token).map(|(email, token)| Self { email, token }))
    }

    /// Remove both admin keys.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure after attempting both removals.
    pub fn clear<S: SessionStorage>(storage: &mut S) -> Result<(), StorageError> {
        remove_all(storage, &[ADMIN_EMAIL_KEY, ADMIN_TOKEN_KEY])
    }

    /// `document.cookie` assignment that publishes the token site-wide.
    #[must_use]
    pub fn cookie(&self) -> String {
        format!("{ADMIN_COOKIE}={}; path=/", self.token)
    }

    /// `document.cookie` assignment that expires the admin cookie.
    #[must_use]
    pub fn expired_cookie() -> String {
        format!("{ADMIN_COOKIE}=; path=/; max-age=0")
    }
}
