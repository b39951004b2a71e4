//! Push-channel wire format.
//!
//! Every frame is a WebSocket text message carrying a JSON envelope:
//! `{"event": "<name>", "data": <any JSON>}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The event relayed between the ingest endpoint and all viewers.
pub const CHAT_MESSAGE: &str = "chat message";

/// Handshake event sent to a viewer once it has joined the broadcast set.
pub const CONNECT: &str = "connect";

/// A named event with an opaque JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,

    /// Payload, forwarded untouched. A missing field decodes as `null`.
    #[serde(default)]
    pub data: Value,
}

/// Borrowed form used when encoding, so publishing never clones the payload.
#[derive(Serialize)]
struct EnvelopeRef<'a> {
    event: &'a str,
    data: &'a Value,
}

/// Encodes an event and payload into a text frame.
pub fn encode(event: &str, data: &Value) -> serde_json::Result<String> {
    serde_json::to_string(&EnvelopeRef { event, data })
}

/// Decodes a viewer-originated text frame. Returns `None` for anything
/// that is not an envelope object.
pub fn decode(text: &str) -> Option<Envelope> {
    let value: Value = serde_json::from_str(text).ok()?;
    // Derived `Deserialize` also accepts a `[event, data]` sequence.
    if !value.is_object() {
        return None;
    }
    Envelope::deserialize(value).ok()
}
