#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::create_id;
use super::Message;

pub const DEFAULT_TITLE: &str = "New conversation";
const TITLE_MAX_CHARS: usize = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub model: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(model: &str) -> Conversation {
        return Conversation {
            id: create_id(),
            title: DEFAULT_TITLE.to_string(),
            model: model.to_string(),
            messages: vec![],
        };
    }

    /// Title derived from the first message of a conversation.
    pub fn title_from(text: &str) -> String {
        let mut title = text.chars().take(TITLE_MAX_CHARS).collect::<String>();
        if text.chars().count() > TITLE_MAX_CHARS {
            title += "...";
        }

        return title;
    }
}
