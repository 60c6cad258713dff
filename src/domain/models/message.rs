#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::create_id;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Messages are never edited after creation, a
/// conversation only ever grows by appending new ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Message {
        return Message {
            id: create_id(),
            role,
            content: content.to_string(),
        };
    }
}
