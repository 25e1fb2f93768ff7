/*
[INPUT]:  Asset ticker IDs
[OUTPUT]: Supported asset listings as raw JSON
[POS]:    HTTP layer - asset endpoints
[UPDATE]: When adding asset endpoints
*/

use serde_json::Value;

use crate::http::{ApiClient, Result};

/// Asset endpoints
#[derive(Debug, Clone)]
pub struct AssetEndpoints {
    client: ApiClient,
}

impl AssetEndpoints {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists all assets the service supports
    ///
    /// GET /assets
    pub async fn list_all_assets(&self) -> Result<Value> {
        self.client.get_json("assets").await
    }

    /// Gets a specific asset by ticker ID
    ///
    /// GET /assets/{ticker_id}
    pub async fn get_specific_asset(&self, ticker_id: &str) -> Result<Value> {
        let endpoint = format!("assets/{}", ticker_id);
        self.client.get_json(&endpoint).await
    }
}
