#[cfg(test)]
#[path = "chat_request_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::GatewayError;
use super::Message;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Parses a raw request body. A missing, non-array or empty `messages`
    /// field is a validation error, including bodies that are not objects.
    /// Invalid JSON, a `null` body or a bad array entry is a malformed request.
    pub fn parse(body: &[u8]) -> Result<ChatRequest, GatewayError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|err| return GatewayError::MalformedRequest(err.to_string()))?;

        // Other non-object bodies have no `messages` and fall through to the
        // validation error below.
        if value.is_null() {
            return Err(GatewayError::MalformedRequest(
                "request body is null".to_string(),
            ));
        }

        let raw_messages = match value.get("messages") {
            Some(Value::Array(raw_messages)) if !raw_messages.is_empty() => raw_messages,
            _ => return Err(GatewayError::Validation),
        };

        let messages = raw_messages
            .iter()
            .map(|raw| return Message::deserialize(raw))
            .collect::<Result<Vec<Message>, serde_json::Error>>()
            .map_err(|err| return GatewayError::MalformedRequest(err.to_string()))?;

        return Ok(ChatRequest { messages });
    }
}
