/*
[INPUT]:  API key/secret and optional header overrides
[OUTPUT]: One handle over the asset, normalized-data and exchange endpoint groups
[POS]:    HTTP layer - facade client
[UPDATE]: When adding endpoint groups or credential operations
*/

use std::sync::Arc;

use arc_swap::ArcSwap;
use reqwest::header::HeaderMap;

use crate::http::client::{AuthState, SharedAuth};
use crate::http::{
    ApiClient, AssetEndpoints, BlockfactsEndpoints, ClientConfig, Credentials, ExchangeEndpoints,
    REST_BASE_URL, Result,
};

/// Facade over the three BlockFacts REST endpoint groups
///
/// All groups read one shared auth state at request time, so
/// [`RestClient::set_key`] and friends take effect on the next call of every
/// group at once.
#[derive(Debug, Clone)]
pub struct RestClient {
    auth: SharedAuth,
    assets: AssetEndpoints,
    blockfacts: BlockfactsEndpoints,
    exchanges: ExchangeEndpoints,
}

impl RestClient {
    /// Create a client against the production API with default configuration
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Credentials::new(key, secret))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::with_config_and_base_url(config, credentials, REST_BASE_URL)
    }

    /// Create a client against a custom base URL (mirrors, test servers)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        credentials: Credentials,
        base_url: &str,
    ) -> Result<Self> {
        let auth: SharedAuth = Arc::new(ArcSwap::from_pointee(AuthState {
            credentials,
            headers: None,
        }));
        let client = ApiClient::with_config_and_base_url(&config, base_url, auth.clone())?;

        Ok(Self {
            auth,
            assets: AssetEndpoints::new(client.clone()),
            blockfacts: BlockfactsEndpoints::new(client.clone()),
            exchanges: ExchangeEndpoints::new(client),
        })
    }

    pub fn assets(&self) -> &AssetEndpoints {
        &self.assets
    }

    pub fn blockfacts(&self) -> &BlockfactsEndpoints {
        &self.blockfacts
    }

    pub fn exchanges(&self) -> &ExchangeEndpoints {
        &self.exchanges
    }

    /// Current credentials snapshot
    pub fn credentials(&self) -> Credentials {
        self.auth.load().credentials.clone()
    }

    /// Replace the API key for every endpoint group
    pub fn set_key(&self, key: impl Into<String>) {
        let key = key.into();
        self.auth.rcu(|state| {
            let mut next = AuthState::clone(state);
            next.credentials.key = key.clone();
            next
        });
    }

    /// Replace the API secret for every endpoint group
    pub fn set_secret(&self, secret: impl Into<String>) {
        let secret = secret.into();
        self.auth.rcu(|state| {
            let mut next = AuthState::clone(state);
            next.credentials.secret = secret.clone();
            next
        });
    }

    /// Send exactly these headers on every request instead of the
    /// credential-derived `Content-Type`/`X-API-KEY`/`X-API-SECRET` set.
    pub fn set_headers(&self, headers: HeaderMap) {
        self.auth.rcu(|state| {
            let mut next = AuthState::clone(state);
            next.headers = Some(headers.clone());
            next
        });
    }

    /// Go back to headers derived from the current credentials
    pub fn clear_headers(&self) {
        self.auth.rcu(|state| {
            let mut next = AuthState::clone(state);
            next.headers = None;
            next
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_key_and_secret() {
        let client = RestClient::new("K", "S").expect("client init");
        assert_eq!(client.credentials(), Credentials::new("K", "S"));

        client.set_key("K2");
        assert_eq!(client.credentials(), Credentials::new("K2", "S"));

        client.set_secret("S2");
        assert_eq!(client.credentials(), Credentials::new("K2", "S2"));
    }

    #[test]
    fn test_default_client_uses_placeholders() {
        let client = RestClient::with_config(ClientConfig::default(), Credentials::default())
            .expect("client init");
        assert_eq!(client.credentials(), Credentials::default());
    }

    #[test]
    fn test_clones_share_credentials() {
        let client = RestClient::new("K", "S").expect("client init");
        let cloned = client.clone();
        client.set_key("K2");
        assert_eq!(cloned.credentials().key, "K2");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = RestClient::with_config_and_base_url(
            ClientConfig::default(),
            Credentials::default(),
            "not a url",
        )
        .unwrap_err();
        assert!(matches!(err, crate::BlockfactsError::UrlParse(_)));
    }

    #[test]
    fn test_stream_url_rejected_as_rest_base() {
        let err = RestClient::with_config_and_base_url(
            ClientConfig::default(),
            Credentials::default(),
            crate::ws::STREAM_URL,
        )
        .unwrap_err();
        assert!(matches!(err, crate::BlockfactsError::Config(_)));
    }
}
