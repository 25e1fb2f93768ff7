/*
[INPUT]:  HTTP configuration (base URL, timeouts) and shared credentials
[OUTPUT]: Authenticated GET requests decoded as JSON
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing header handling
*/

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::http::{BlockfactsError, Result};

/// Base URL for the BlockFacts REST API
pub const REST_BASE_URL: &str = "https://api.blockfacts.io/api/v1/";

const DEFAULT_KEY: &str = "api-key-not-specified";
const DEFAULT_SECRET: &str = "api-secret-not-specified";

pub(crate) const API_KEY_HEADER: &str = "x-api-key";
pub(crate) const API_SECRET_HEADER: &str = "x-api-secret";

/// HTTP client configuration
///
/// Both timeouts are off by default; requests wait as long as the
/// transport allows unless the caller opts in here.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// API key and secret sent with every REST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_KEY, DEFAULT_SECRET)
    }
}

/// Header state read by every request at send time
#[derive(Debug, Clone, Default)]
pub(crate) struct AuthState {
    pub(crate) credentials: Credentials,
    /// Replaces the credential-derived headers when set
    pub(crate) headers: Option<HeaderMap>,
}

impl AuthState {
    fn header_map(&self) -> Result<HeaderMap> {
        if let Some(headers) = &self.headers {
            return Ok(headers.clone());
        }

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(API_KEY_HEADER, &self.credentials.key)?,
        );
        headers.insert(
            HeaderName::from_static(API_SECRET_HEADER),
            header_value(API_SECRET_HEADER, &self.credentials.secret)?,
        );
        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| BlockfactsError::InvalidHeader(name.to_string()))
}

/// Shared handle to the auth state; cloned into every endpoint group.
pub(crate) type SharedAuth = Arc<ArcSwap<AuthState>>;

/// Authenticated request issuer for the BlockFacts REST API
///
/// Cheap to clone: the connection pool and the auth state are both shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    auth: SharedAuth,
}

impl ApiClient {
    pub(crate) fn with_config_and_base_url(
        config: &ClientConfig,
        base_url: &str,
        auth: SharedAuth,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: parse_base_url(base_url)?,
            auth,
        })
    }

    /// Base URL every endpoint path is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Current credentials snapshot
    pub fn credentials(&self) -> Credentials {
        self.auth.load().credentials.clone()
    }

    /// Build full URL for an endpoint relative to the base
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// GET an endpoint and decode the body as JSON
    ///
    /// Headers are read from the shared auth state on every call. The status
    /// code is not inspected: whatever body comes back is decoded.
    pub async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = self.url(endpoint)?;
        let headers = self.auth.load().header_map()?;

        let response = self.http_client.get(url).headers(headers).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(endpoint, status = status.as_u16(), bytes = body.len(), "rest response");

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Parse a base URL, adding the trailing `/` that `Url::join` needs to keep the last segment.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = if base_url.ends_with('/') {
        Url::parse(base_url)?
    } else {
        Url::parse(&format!("{base_url}/"))?
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(BlockfactsError::Config(format!(
            "base URL must use http or https, got {scheme}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let credentials = Credentials::default();
        assert_eq!(credentials.key, "api-key-not-specified");
        assert_eq!(credentials.secret, "api-secret-not-specified");
    }

    #[test]
    fn test_default_headers() {
        let state = AuthState {
            credentials: Credentials::new("K", "S"),
            headers: None,
        };
        let headers = state.header_map().expect("headers");

        assert_eq!(headers.len(), 3);
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["x-api-key"], "K");
        assert_eq!(headers["x-api-secret"], "S");
    }

    #[test]
    fn test_override_headers_replace_defaults() {
        let mut custom = HeaderMap::new();
        custom.insert("x-api-key", HeaderValue::from_static("override"));
        let state = AuthState {
            credentials: Credentials::new("K", "S"),
            headers: Some(custom),
        };
        let headers = state.header_map().expect("headers");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers["x-api-key"], "override");
    }

    #[test]
    fn test_invalid_header_value() {
        let state = AuthState {
            credentials: Credentials::new("bad\nkey", "S"),
            headers: None,
        };
        let err = state.header_map().unwrap_err();
        assert!(matches!(err, BlockfactsError::InvalidHeader(name) if name == "x-api-key"));
    }

    #[test]
    fn test_base_url_rejects_non_http_scheme() {
        let err = parse_base_url("wss://ws.blockfacts.io/v1/").unwrap_err();
        assert!(matches!(&err, BlockfactsError::Config(msg) if msg.contains("wss")));
        assert!(!err.is_connection_error());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let url = parse_base_url("http://127.0.0.1:8080/api/v1").expect("url");
        assert_eq!(url.join("assets").expect("join").path(), "/api/v1/assets");

        let url = parse_base_url(REST_BASE_URL).expect("url");
        assert_eq!(
            url.join("blockfacts/price?asset=BTC,ETH&denominator=USD")
                .expect("join")
                .as_str(),
            "https://api.blockfacts.io/api/v1/blockfacts/price?asset=BTC,ETH&denominator=USD"
        );
    }
}
