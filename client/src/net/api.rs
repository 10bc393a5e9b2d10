//! REST API helpers for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds return a
//! transport error since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, FetchError>`; envelope checks and record
//! normalization are delegated to `content::api` so the browser and the CLI
//! agree on what counts as a valid response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use content::api::{self, LoginGrant};
use content::{ContentItem, ContentKind, FetchError, LoginRequest, Role, SignupRequest};

#[cfg(any(test, feature = "csr"))]
fn url(path: &str) -> String {
    api::endpoint_url(crate::util::config::API_BASE_URL, path)
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> FetchError {
    FetchError::transport("indisponible hors du navigateur")
}

#[cfg(feature = "csr")]
async fn read(request: gloo_net::http::Request) -> Result<(u16, String), FetchError> {
    let transport = |err: gloo_net::Error| FetchError::transport(err.to_string());
    let resp = request.send().await.map_err(transport)?;
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    log::debug!("{} {status}", resp.url());
    Ok((status, body))
}

#[cfg(feature = "csr")]
async fn get(path: &str) -> Result<(u16, String), FetchError> {
    let request = gloo_net::http::Request::get(&url(path))
        .header("Accept", "application/json")
        .build()
        .map_err(|err| FetchError::transport(err.to_string()))?;
    read(request).await
}

#[cfg(feature = "csr")]
async fn post<B: serde::Serialize>(path: &str, body: &B) -> Result<(u16, String), FetchError> {
    let request = gloo_net::http::Request::post(&url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|err| FetchError::transport(err.to_string()))?;
    read(request).await
}

/// Fetch and normalize the article or project list, preserving backend order.
pub async fn fetch_list(kind: ContentKind) -> Result<Vec<ContentItem>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = get(api::collection_path(kind)).await?;
        api::decode_list(kind, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = kind;
        Err(unavailable())
    }
}

/// Fetch one article or project by slug.
pub async fn fetch_item(kind: ContentKind, slug: &str) -> Result<ContentItem, FetchError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = get(&api::detail_path(kind, slug)).await?;
        api::decode_item(kind, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (kind, slug);
        Err(unavailable())
    }
}

/// `POST /api/{role}s/login`.
pub async fn login(role: Role, credentials: &LoginRequest) -> Result<LoginGrant, FetchError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = post(&api::login_path(role), credentials).await?;
        api::decode_login(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (role, credentials);
        Err(unavailable())
    }
}

/// `POST /api/admin/login`.
pub async fn admin_login(credentials: &LoginRequest) -> Result<LoginGrant, FetchError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = post(api::ADMIN_LOGIN_PATH, credentials).await?;
        api::decode_login(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// Create an account; returns the backend's confirmation message, if any.
pub async fn register(request: &SignupRequest) -> Result<Option<String>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = post(&api::register_path(request.role), request).await?;
        api::decode_ack(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(unavailable())
    }
}
