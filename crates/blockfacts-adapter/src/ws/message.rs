/*
[INPUT]:  Caller payloads (raw text, JSON values, typed subscriptions)
[OUTPUT]: Text frames ready to send on the stream
[POS]:    WebSocket layer - outbound message shapes
[UPDATE]: When adding new message types or changing format
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::Result;

/// Outbound payload: raw text is sent verbatim, JSON values are serialized compactly
#[derive(Debug, Clone, PartialEq)]
pub enum StreamPayload {
    Text(String),
    Json(Value),
    Subscription(SubscriptionMessage),
}

impl StreamPayload {
    pub fn into_text(self) -> Result<String> {
        match self {
            StreamPayload::Text(text) => Ok(text),
            StreamPayload::Json(value) => Ok(serde_json::to_string(&value)?),
            StreamPayload::Subscription(message) => Ok(serde_json::to_string(&message)?),
        }
    }
}

impl From<&str> for StreamPayload {
    fn from(value: &str) -> Self {
        StreamPayload::Text(value.to_string())
    }
}

impl From<String> for StreamPayload {
    fn from(value: String) -> Self {
        StreamPayload::Text(value)
    }
}

impl From<Value> for StreamPayload {
    fn from(value: Value) -> Self {
        StreamPayload::Json(value)
    }
}

impl From<SubscriptionMessage> for StreamPayload {
    fn from(value: SubscriptionMessage) -> Self {
        StreamPayload::Subscription(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionAction {
    Subscribe,
    Unsubscribe,
}

/// Channel and the asset-denominator pairs requested on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<String>,
}

impl Channel {
    pub fn new<I, S>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            pairs: pairs.into_iter().map(Into::into).collect(),
        }
    }
}

/// `{"type":"subscribe","channels":[{"name":..,"pairs":[..]}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionMessage {
    #[serde(rename = "type")]
    pub action: SubscriptionAction,
    pub channels: Vec<Channel>,
}

impl SubscriptionMessage {
    pub fn subscribe(channels: Vec<Channel>) -> Self {
        Self {
            action: SubscriptionAction::Subscribe,
            channels,
        }
    }

    pub fn unsubscribe(channels: Vec<Channel>) -> Self {
        Self {
            action: SubscriptionAction::Unsubscribe,
            channels,
        }
    }
}

/// Application-level keepalive frames
pub(crate) fn control_frame(kind: &str) -> String {
    serde_json::json!({ "type": kind }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_payload_forwarded_verbatim() {
        let raw = r#"{ "type" : "subscribe" }"#;
        let text = StreamPayload::from(raw).into_text().expect("text");
        assert_eq!(text, raw);
    }

    #[test]
    fn test_json_payload_serialized() {
        let text = StreamPayload::from(json!({"type": "foo"}))
            .into_text()
            .expect("text");
        assert_eq!(text, r#"{"type":"foo"}"#);
    }

    #[test]
    fn test_subscription_shape() {
        let message = SubscriptionMessage::subscribe(vec![
            Channel::new("BLOCKFACTS", ["BTC-USD", "ETH-USD"]),
            Channel::new("HEARTBEAT", Vec::<String>::new()),
        ]);
        let value: Value =
            serde_json::from_str(&StreamPayload::from(message).into_text().expect("text"))
                .expect("json");

        assert_eq!(
            value,
            json!({
                "type": "subscribe",
                "channels": [
                    {"name": "BLOCKFACTS", "pairs": ["BTC-USD", "ETH-USD"]},
                    {"name": "HEARTBEAT"}
                ]
            })
        );
    }

    #[test]
    fn test_unsubscribe_roundtrip_from_service_shape() {
        let parsed: SubscriptionMessage = serde_json::from_value(json!({
            "type": "unsubscribe",
            "channels": [{"name": "BLOCKFACTS"}]
        }))
        .expect("parse");
        assert_eq!(
            parsed,
            SubscriptionMessage::unsubscribe(vec![Channel::new("BLOCKFACTS", Vec::<String>::new())])
        );
    }

    #[test]
    fn test_control_frames() {
        assert_eq!(control_frame("ping"), r#"{"type":"ping"}"#);
        assert_eq!(control_frame("pong"), r#"{"type":"pong"}"#);
    }
}
