//! Backend response envelope `{ success, data, message? }`.
//!
//! ERROR HANDLING
//! ==============
//! Consumers fail closed. A transport failure or non-2xx status becomes
//! [`FetchError::Network`]; any body that does not honour the envelope
//! contract becomes [`FetchError::InvalidResponse`], whatever the status.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde_json::{Map, Value};

/// Message used when the backend rejects a payload without explaining why.
pub const INVALID_RESPONSE_FALLBACK: &str = "Réponse invalide du serveur";

/// Failure of a backend call, as surfaced to the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure (`status` is `None`) or non-2xx HTTP status.
    #[error("erreur réseau: {message}")]
    Network { status: Option<u16>, message: String },
    /// The backend answered but the payload broke the `{success, data}` contract.
    #[error("{0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Build a transport-level failure (connection refused, DNS, timeout...).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Network { status: None, message: message.into() }
    }

    /// Build a failure for a non-2xx status, keeping the backend's message if any.
    #[must_use]
    pub fn http_status(status: u16, message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(|| format!("HTTP {status}"), ToOwned::to_owned);
        Self::Network { status: Some(status), message }
    }

    /// Build a contract failure, falling back to a generic message.
    #[must_use]
    pub fn invalid(message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(INVALID_RESPONSE_FALLBACK);
        Self::InvalidResponse(message.to_owned())
    }

    /// HTTP status carried by a network failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            Self::InvalidResponse(_) => None,
        }
    }
}

/// Parse the body leniently and pick up the backend's `message`, if any.
fn parse_body(body: &str) -> (Option<Value>, Option<String>) {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);
    (parsed, message)
}

/// Validate status and `success`, returning the envelope object and message.
fn open_checked(status: u16, body: &str) -> Result<(Map<String, Value>, Option<String>), FetchError> {
    let (parsed, message) = parse_body(body);
    if !(200..300).contains(&status) {
        return Err(FetchError::http_status(status, message.as_deref()));
    }
    let Some(Value::Object(envelope)) = parsed else {
        return Err(FetchError::invalid(None));
    };
    if envelope.get("success") != Some(&Value::Bool(true)) {
        return Err(FetchError::invalid(message.as_deref()));
    }
    Ok((envelope, message))
}

/// Validate status and envelope, returning `data` and the optional backend message.
fn open(status: u16, body: &str) -> Result<(Value, Option<String>), FetchError> {
    let (mut envelope, message) = open_checked(status, body)?;
    match envelope.remove("data") {
        None | Some(Value::Null) => Err(FetchError::invalid(message.as_deref())),
        Some(data) => Ok((data, message)),
    }
}

/// Open an envelope where only `success` matters (signup and similar
/// commands). Returns the backend's confirmation message, if any.
///
/// # Errors
///
/// Returns [`FetchError::Network`] for non-2xx statuses and
/// [`FetchError::InvalidResponse`] when `success` is not `true`.
pub fn open_ack(status: u16, body: &str) -> Result<Option<String>, FetchError> {
    open_checked(status, body).map(|(_, message)| message)
}

/// Open an envelope whose `data` must be an array (list endpoints).
///
/// # Errors
///
/// Returns [`FetchError::Network`] for non-2xx statuses and
/// [`FetchError::InvalidResponse`] when `success` is not `true` or `data`
/// is not an array.
pub fn open_list(status: u16, body: &str) -> Result<Vec<Value>, FetchError> {
    match open(status, body)? {
        (Value::Array(items), _) => Ok(items),
        (_, message) => Err(FetchError::invalid(message.as_deref())),
    }
}

/// Open an envelope whose `data` must be an object (detail and login endpoints).
///
/// # Errors
///
/// Same policy as [`open_list`], with `data` required to be an object.
pub fn open_object(status: u16, body: &str) -> Result<Map<String, Value>, FetchError> {
    match open(status, body)? {
        (Value::Object(record), _) => Ok(record),
        (_, message) => Err(FetchError::invalid(message.as_deref())),
    }
}
