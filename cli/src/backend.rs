//! `reqwest` transport for the content backend.
//!
//! Only moves bytes: status and body text are handed to `content::api`
//! for envelope checking and normalization, exactly as the browser client
//! does with `gloo-net`.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use content::api::{self, LoginGrant};
use content::{ContentItem, ContentKind, FetchError, LoginRequest, Role, SignupRequest};
use reqwest::RequestBuilder;

#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    /// Build a client with a whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error (TLS backend initialization).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        api::endpoint_url(&self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), FetchError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status, bytes = body.len(), "backend response");
        Ok((status, body))
    }

    pub async fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, FetchError> {
        let url = self.url(api::collection_path(kind));
        tracing::info!(%url, "fetching content list");
        let (status, body) = self.send(self.client.get(&url)).await?;
        api::decode_list(kind, status, &body)
    }

    pub async fn item(&self, kind: ContentKind, slug: &str) -> Result<ContentItem, FetchError> {
        let url = self.url(&api::detail_path(kind, slug));
        tracing::info!(%url, "fetching content item");
        let (status, body) = self.send(self.client.get(&url)).await?;
        api::decode_item(kind, status, &body)
    }

    pub async fn login(&self, role: Role, credentials: &LoginRequest) -> Result<LoginGrant, FetchError> {
        let url = self.url(&api::login_path(role));
        tracing::info!(%url, %role, "logging in");
        let (status, body) = self.send(self.client.post(&url).json(credentials)).await?;
        api::decode_login(status, &body)
    }

    pub async fn admin_login(&self, credentials: &LoginRequest) -> Result<LoginGrant, FetchError> {
        let url = self.url(api::ADMIN_LOGIN_PATH);
        tracing::info!(%url, "admin login");
        let (status, body) = self.send(self.client.post(&url).json(credentials)).await?;
        api::decode_login(status, &body)
    }

    pub async fn register(&self, request: &SignupRequest) -> Result<Option<String>, FetchError> {
        let url = self.url(&api::register_path(request.role));
        tracing::info!(%url, role = %request.role, "registering account");
        let (status, body) = self.send(self.client.post(&url).json(request)).await?;
        api::decode_ack(status, &body)
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::transport("délai d'attente dépassé");
    }
    FetchError::transport(err.to_string())
}
