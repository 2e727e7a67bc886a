use anyhow::{Context, Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::Session;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// HTTP client for the simulator backend. Holds no session state: calls
/// that need authentication take an explicit [`Session`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `TRADESIM_API_URL`, falling back to the local dev
    /// server.
    pub fn from_env() -> Self {
        let base_url = std::env::var("TRADESIM_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    fn authorize(request: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(session) => request.bearer_auth(session.token()),
            None => request,
        }
    }

    pub(crate) async fn get<T>(&self, endpoint: &str, session: Option<&Session>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(endpoint, "GET");
        let request = Self::authorize(self.client.get(self.url(endpoint)), session);
        let response = request.send().await?;
        decode(response, endpoint).await
    }

    pub(crate) async fn post<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(endpoint, "POST");
        let request = Self::authorize(self.client.post(self.url(endpoint)).json(body), session);
        let response = request.send().await?;
        decode(response, endpoint).await
    }
}

async fn decode<T>(response: Response, endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(Error::msg(format!(
            "{} failed ({}): {}",
            endpoint,
            status,
            error_message(&text)
        )));
    }

    serde_json::from_str(&text)
        .with_context(|| format!("Failed to decode response from {}", endpoint))
}

// Backend errors arrive as {"message": ...} or {"error": ...}.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(|field| field.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}
