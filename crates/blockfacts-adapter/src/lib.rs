/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BlockFacts adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod params;
pub mod ws;

// Re-export commonly used types from http
pub use http::{
    ApiClient,
    AssetEndpoints,
    BlockfactsEndpoints,
    BlockfactsError,
    ClientConfig,
    Credentials,
    ExchangeEndpoints,
    RestClient,
    Result,
};

// Re-export parameter helpers
pub use params::{DEFAULT_PAGE, MoversSort, MultiValue, join_values, normalize_joined};

// Re-export commonly used types from ws
pub use ws::{
    BlockfactsWebSocket,
    Channel,
    StreamPayload,
    SubscriptionAction,
    SubscriptionMessage,
};
