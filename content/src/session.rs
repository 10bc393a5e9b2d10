//! Authenticated identity and its durable persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client persists the session in `localStorage`, the CLI in a
//! JSON file. Both go through [`SessionStorage`] under the same three keys
//! (`user`, `role`, `auth_token`) so a session written by one front end has
//! the same shape as one written by the other.
//!
//! DESIGN
//! ======
//! The in-memory identity is an `Option<Identity>`: user, role and token
//! are set together or cleared together, never partially. Rehydration is
//! all-or-nothing for the same reason.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`logout` always update the in-memory identity, then report the
//! first storage failure to the caller. A partially written store is
//! harmless because `rehydrate` refuses anything short of all three keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "role";
pub const TOKEN_KEY: &str = "auth_token";

/// Account type of the signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Medecin,
    Clinique,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Patient, Self::Medecin, Self::Clinique];

    /// Storage/wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Medecin => "medecin",
            Self::Clinique => "clinique",
        }
    }

    /// Human-readable label for role pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Medecin => "Médecin",
            Self::Clinique => "Clinique",
        }
    }

    /// Plural path segment used by the auth endpoints.
    #[must_use]
    pub fn api_segment(self) -> &'static str {
        match self {
            Self::Patient => "patients",
            Self::Medecin => "medecins",
            Self::Clinique => "cliniques",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == raw)
            .ok_or_else(|| UnknownRole(raw.to_owned()))
    }
}

/// Failure of the durable storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value store with `localStorage` semantics.
pub trait SessionStorage {
    /// Read `key`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used in tests and as a no-persistence fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A complete authenticated session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// User record as returned by the backend; shape depends on the role.
    pub user: Value,
    pub role: Role,
    /// Opaque bearer token, trusted until a request fails.
    pub token: String,
}

impl Identity {
    /// Best-effort display name taken from the user record.
    #[must_use]
    pub fn display_name(&self) -> String {
        let field = |key: &str| {
            self.user
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };
        match (field("prenom"), field("nom")) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => field("name")
                .or_else(|| field("nom"))
                .or_else(|| field("email"))
                .unwrap_or(self.role.label())
                .to_owned(),
        }
    }
}

/// Session container over a durable [`SessionStorage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    identity: Option<Identity>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a logged-out store. Call [`Self::rehydrate`] to restore a session.
    pub fn new(storage: S) -> Self {
        Self { storage, identity: None }
    }

    /// Restore the persisted session if, and only if, all three keys are
    /// present and decodable. Returns whether a session was restored.
    ///
    /// Empty or corrupt values (user that is not JSON, unknown role label)
    /// count as absent and leave the store logged out.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the storage backend; the store stays
    /// logged out in that case.
    pub fn rehydrate(&mut self) -> Result<bool, StorageError> {
        let user = self.storage.get(USER_KEY)?;
        let role = self.storage.get(ROLE_KEY)?;
        let token = self.storage.get(TOKEN_KEY)?;
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());
        let (Some(user), Some(role), Some(token)) = (present(user), present(role), present(token)) else {
            return Ok(false);
        };
        let (Ok(user), Ok(role)) = (serde_json::from_str::<Value>(&user), role.parse::<Role>()) else {
            return Ok(false);
        };
        self.identity = Some(Identity { user, role, token });
        Ok(true)
    }

    /// Replace the identity and persist it under the three session keys.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure. The in-memory identity is updated
    /// regardless.
    pub fn login(&mut self, user: Value, role: Role, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        let encoded_user = serde_json::to_string(&user)?;
        let result = write_all(
            &mut self.storage,
            &[(USER_KEY, encoded_user.as_str()), (ROLE_KEY, role.as_str()), (TOKEN_KEY, token.as_str())],
        );
        self.identity = Some(Identity { user, role, token });
        result
    }

    /// Clear the identity and remove the three session keys.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure. The in-memory identity is cleared
    /// regardless.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.identity = None;
        remove_all(&mut self.storage, &[USER_KEY, ROLE_KEY, TOKEN_KEY])
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&Value> {
        self.identity.as_ref().map(|i| &i.user)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    /// Bearer token, or `""` when logged out.
    #[must_use]
    pub fn token(&self) -> &str {
        self.identity.as_ref().map_or("", |i| i.token.as_str())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

/// Write every pair, attempting all of them, and report the first failure.
pub(crate) fn write_all<S: SessionStorage>(storage: &mut S, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
    let mut first_err = None;
    for (key, value) in pairs {
        if let Err(err) = storage.set(key, value) {
            first_err = first_err.or(Some(err));
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Attempt every removal, then report the first failure.
pub(crate) fn remove_all<S: SessionStorage>(storage: &mut S, keys: &[&str]) -> Result<(), StorageError> {
    let mut first_err = None;
    for key in keys {
        if let Err(err) = storage.remove(key) {
            first_err = first_err.or(Some(err));
        }
    }
    first_err.map_or(Ok(()), Err)
}
