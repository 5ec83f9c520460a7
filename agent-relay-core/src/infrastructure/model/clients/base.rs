//! Base HTTP client with shared logic

use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// How a backend authenticates its requests
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// `Authorization: Bearer <key>`
    Bearer(&'a str),
    /// `api-key: <key>`, used by Azure OpenAI
    ApiKeyHeader(&'a str),
}

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            api_key,
            http: Client::new(),
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post a JSON body and decode the JSON reply without assuming its shape
    pub async fn post_json<Req>(&self, url: &str, auth: Auth<'_>, body: &Req) -> Result<Value, ModelError>
    where
        Req: Serialize,
    {
        let request = self.http.post(url).json(body);
        let request = match auth {
            Auth::Bearer(key) => request.bearer_auth(key),
            Auth::ApiKeyHeader(key) => request.header("api-key", key),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?
            .error_for_status()
            .map_err(|e| ModelError::network(&self.id, e))?;

        let text = response
            .text()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?;

        serde_json::from_str(&text)
            .map_err(|e| ModelError::invalid_response(&self.id, format!("body is not JSON: {e}")))
    }

    pub fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ModelError::missing_api_key(&self.id))
    }
}
