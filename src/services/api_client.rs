// src/services/api_client.rs
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::RequestError,
    message::{
        CategoryList, ChatRequest, ChatResponse, KnowledgeBaseItem, RateRequest,
        SemanticSearchRequest,
    },
};

/// Thin JSON client for the chatbot backend. Every call is one round trip:
/// no timeout, no retry, no caching.
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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `base_url + path` and parse the JSON reply.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response).await
    }

    /// GET `base_url + url` and parse the JSON reply. `url` must already be
    /// percent-encoded.
    pub async fn get_json<T>(&self, url: &str) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, url);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    pub async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse, RequestError> {
        self.post_json("/chat", req).await
    }

    pub async fn rate(&self, req: &RateRequest) -> Result<Value, RequestError> {
        self.post_json("/rate", req).await
    }

    pub async fn kb_search(&self, q: &str) -> Result<Vec<KnowledgeBaseItem>, RequestError> {
        self.get_json(&format!("/kb/search?q={}", urlencoding::encode(q)))
            .await
    }

    pub async fn kb_item(&self, id: i64) -> Result<KnowledgeBaseItem, RequestError> {
        self.get_json(&format!("/kb/{}", id)).await
    }

    pub async fn es_search(&self, req: &SemanticSearchRequest) -> Result<Value, RequestError> {
        self.post_json("/es/search", req).await
    }

    pub async fn es_categories(&self) -> Result<CategoryList, RequestError> {
        self.get_json("/es/categories").await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        warn!(%status, "backend rejected request");
        return Err(RequestError::Status { status, body });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
