//! Backend endpoint map and response decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transports (`gloo-net` in the browser, `reqwest` in the CLI) only move
//! bytes. They hand the status code and body text to the `decode_*`
//! functions here, so both front ends apply the exact same envelope and
//! normalization rules.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Map, Value};

use crate::envelope::{FetchError, open_ack, open_list, open_object};
use crate::item::{ContentItem, ContentKind, normalize, normalize_all};
use crate::session::Role;

pub const ARTICLES_PATH: &str = "/api/articles";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const ADMIN_LOGIN_PATH: &str = "/api/admin/login";

#[must_use]
pub fn collection_path(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => ARTICLES_PATH,
        ContentKind::Project => PROJECTS_PATH,
    }
}

#[must_use]
pub fn detail_path(kind: ContentKind, slug: &str) -> String {
    format!("{}/{slug}", collection_path(kind))
}

#[must_use]
pub fn login_path(role: Role) -> String {
    format!("/api/{}/login", role.api_segment())
}

#[must_use]
pub fn register_path(role: Role) -> String {
    format!("/api/{}/register", role.api_segment())
}

/// Join a configured base URL and an endpoint path.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Decode a list endpoint response into normalized items.
///
/// # Errors
///
/// See [`open_list`].
pub fn decode_list(kind: ContentKind, status: u16, body: &str) -> Result<Vec<ContentItem>, FetchError> {
    let raw = open_list(status, body)?;
    Ok(normalize_all(kind, &raw))
}

/// Decode a detail endpoint response into one normalized item.
///
/// # Errors
///
/// See [`open_object`].
pub fn decode_item(kind: ContentKind, status: u16, body: &str) -> Result<ContentItem, FetchError> {
    let record = open_object(status, body)?;
    Ok(normalize(kind, &Value::Object(record), 0))
}

/// User record and bearer token returned by a successful login.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginGrant {
    pub user: Value,
    pub token: String,
}

impl LoginGrant {
    /// Extract the grant from a login `data` object.
    ///
    /// The token is read from `token` or `access_token`. The user is
    /// `data.user` when present, otherwise `data` without the token fields.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidResponse`] when no non-empty token is present.
    pub fn from_data(mut data: Map<String, Value>) -> Result<Self, FetchError> {
        let token = ["token", "access_token"]
            .iter()
            .find_map(|key| data.get(*key).and_then(Value::as_str))
            .filter(|token| !token.is_empty())
            .map(ToOwned::to_owned)
            .ok_or_else(|| FetchError::invalid(None))?;

        let user = match data.remove("user") {
            Some(user @ Value::Object(_)) => user,
            _ => {
                data.remove("token");
                data.remove("access_token");
                data.remove("token_type");
                Value::Object(data)
            }
        };
        Ok(Self { user, token })
    }
}

/// Decode a login response.
///
/// # Errors
///
/// Envelope failures as in [`open_object`], plus a missing token.
pub fn decode_login(status: u16, body: &str) -> Result<LoginGrant, FetchError> {
    LoginGrant::from_data(open_object(status, body)?)
}

/// Decode a signup response, returning the backend's confirmation message.
///
/// # Errors
///
/// See [`open_ack`].
pub fn decode_ack(status: u16, body: &str) -> Result<Option<String>, FetchError> {
    open_ack(status, body)
}
