use gloo::net::http::Request;
use portfolio_shared::likes::{
    parse_count, LikeRpcRequest, GET_COUNT_RPC, INCREMENT_RPC, LIKED_STORAGE_KEY,
    LIKED_STORAGE_VALUE,
};
use serde_json::Value;

use super::api::FetchError;
use super::config::LikeConfig;

/// Client for the hosted like counter
#[derive(Clone, Debug, PartialEq)]
pub struct LikeClient {
    config: LikeConfig,
}

impl LikeClient {
    pub fn new(config: LikeConfig) -> Self {
        Self { config }
    }

    /// Current count; `None` when the service answered with something other than a number
    pub async fn fetch_count(&self) -> Result<Option<u64>, FetchError> {
        self.call(GET_COUNT_RPC).await
    }

    /// Increment and return the new count. The service does not deduplicate.
    pub async fn increment(&self) -> Result<Option<u64>, FetchError> {
        self.call(INCREMENT_RPC).await
    }

    async fn call(&self, function: &str) -> Result<Option<u64>, FetchError> {
        let url = self.config.rpc_url(function);
        let network_error = |message: String| FetchError::Network {
            url: url.clone(),
            message,
        };

        let response = Request::post(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
            .header("Prefer", "return=representation")
            .json(&LikeRpcRequest::default())
            .map_err(|e| network_error(e.to_string()))?
            .send()
            .await
            .map_err(|e| network_error(e.to_string()))?;

        let body: Value = response.json().await.map_err(|e| FetchError::Body {
            url: url.clone(),
            message: e.to_string(),
        })?;

        Ok(parse_count(&body))
    }
}

/// Flag persisted by a previous like from this browser
pub fn stored_like_flag() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(LIKED_STORAGE_KEY)
        .ok()?
}

pub fn persist_like_flag() -> Result<(), String> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())?;
    storage
        .set_item(LIKED_STORAGE_KEY, LIKED_STORAGE_VALUE)
        .map_err(|e| format!("Failed to persist like flag: {:?}", e))
}
