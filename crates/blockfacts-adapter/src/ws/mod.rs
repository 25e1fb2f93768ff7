/*
[INPUT]:  Stream URL and subscription payloads
[OUTPUT]: Real-time market data frames delivered to a handler
[POS]:    WebSocket layer - real-time data streams
[UPDATE]: When adding new outbound frames or changing connection logic
*/

pub mod client;
pub mod message;

pub use client::{BlockfactsWebSocket, STREAM_URL};
pub use message::{Channel, StreamPayload, SubscriptionAction, SubscriptionMessage};
