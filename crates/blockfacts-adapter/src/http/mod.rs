/*
[INPUT]:  HTTP client configuration, credentials and endpoint parameters
[OUTPUT]: Raw JSON responses from the BlockFacts REST API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod assets;
pub mod blockfacts;
pub mod client;
pub mod error;
pub mod exchanges;
pub mod rest;

pub use error::{BlockfactsError, Result};

pub use assets::AssetEndpoints;
pub use blockfacts::BlockfactsEndpoints;
pub use client::{ApiClient, ClientConfig, Credentials, REST_BASE_URL};
pub use exchanges::ExchangeEndpoints;
pub use rest::RestClient;
