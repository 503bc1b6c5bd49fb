//! HTTP profile backend
//!
//! JSON over `reqwest`'s blocking client. Each request runs on smol's
//! blocking thread pool so the calling executor never stalls on I/O.

use std::time::Duration;

use adapt_a11y::{AccessibilityProfile, ProfileDraft, ProfileId};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use crate::{NetError, ProfileBackend};

/// REST client for the profile endpoints
#[derive(Debug, Clone)]
pub struct HttpProfileBackend {
    client: reqwest::blocking::Client,
    base: Url,
    bearer_token: Option<String>,
}

impl HttpProfileBackend {
    /// `base_url` is the API root the profile paths are resolved against
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, NetError> {
        let mut base = Url::parse(base_url).map_err(|e| NetError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(NetError::InvalidUrl(base_url.to_string()));
        }
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("adapt-net/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| NetError::Network(e.to_string()))?;

        Ok(Self { client, base, bearer_token: None })
    }

    /// Authenticate requests with `Authorization: Bearer <token>`
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, NetError> {
        self.base.join(path).map_err(|e| NetError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn send(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<Vec<u8>, NetError> {
        let client = self.client.clone();
        let token = self.bearer_token.clone();
        tracing::debug!(%method, %url, "profile request");

        smol::unblock(move || {
            let mut request = client.request(method, url).header(ACCEPT, "application/json");
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }
            if let Some(body) = body {
                request = request.header(CONTENT_TYPE, "application/json").body(body);
            }

            let response = request.send().map_err(|e| NetError::Network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(NetError::HttpError { status: status.as_u16() });
            }
            let bytes = response.bytes().map_err(|e| NetError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        })
        .await
    }
}

impl ProfileBackend for HttpProfileBackend {
    async fn list(&self) -> Result<Vec<AccessibilityProfile>, NetError> {
        let body = self.send(Method::GET, self.endpoint("profiles")?, None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError> {
        let payload = serde_json::to_vec(draft)?;
        let body = self.send(Method::POST, self.endpoint("profile")?, Some(payload)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError> {
        let payload = serde_json::to_vec(draft)?;
        let url = self.endpoint(&format!("profile/{id}"))?;
        let body = self.send(Method::PUT, url, Some(payload)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn delete(&self, id: ProfileId) -> Result<(), NetError> {
        let url = self.endpoint(&format!("profile/{id}"))?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }
}
