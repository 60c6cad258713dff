#[cfg(test)]
#[path = "conversations_test.rs"]
mod tests;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use super::Gateway;
use crate::domain::models::Conversation;
use crate::domain::models::Message;
use crate::domain::models::Role;

pub const FALLBACK_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank text, or no conversation with that id.
    Ignored,
    /// The conversation is still waiting on a previous reply.
    Busy,
    Replied(Message),
    Failed(Message),
}

#[derive(Default)]
struct State {
    conversations: Vec<Conversation>,
    active: Option<String>,
    generating: HashSet<String>,
}

/// Clears a conversation's generating flag when a send finishes or its future
/// is dropped mid-flight.
struct GeneratingGuard<'a> {
    store: &'a ConversationStore,
    id: &'a str,
    armed: bool,
}

impl GeneratingGuard<'_> {
    fn release(mut self, state: &mut State) {
        state.generating.remove(self.id);
        self.armed = false;
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!(conversation = self.id, "Send cancelled before its reply arrived");
            self.store.state().generating.remove(self.id);
        }
    }
}

/// In-memory list of conversations plus the active conversation pointer.
///
/// Every operation apart from `send_message` completes without suspending.
/// `send_message` releases the lock while the gateway call is in flight, and
/// allows one outstanding call per conversation.
pub struct ConversationStore {
    gateway: Arc<Gateway>,
    state: Mutex<State>,
}

impl ConversationStore {
    pub fn new(gateway: Arc<Gateway>) -> ConversationStore {
        return ConversationStore {
            gateway,
            state: Mutex::new(State::default()),
        };
    }

    fn state(&self) -> MutexGuard<'_, State> {
        return self.state.lock().unwrap_or_else(PoisonError::into_inner);
    }

    pub fn create_conversation(&self) -> String {
        let conversation = Conversation::new(&self.gateway.adapter_name());
        let id = conversation.id.to_string();

        let mut state = self.state();
        state.conversations.push(conversation);
        state.active = Some(id.to_string());

        tracing::debug!(conversation = id.as_str(), "Created conversation");
        return id;
    }

    pub fn conversations(&self) -> Vec<Conversation> {
        return self.state().conversations.clone();
    }

    pub fn conversation(&self, id: &str) -> Option<Conversation> {
        return self
            .state()
            .conversations
            .iter()
            .find(|conversation| return conversation.id == id)
            .cloned();
    }

    pub fn active_id(&self) -> Option<String> {
        return self.state().active.clone();
    }

    pub fn active_conversation(&self) -> Option<Conversation> {
        let state = self.state();
        let active = state.active.as_deref()?;

        return state
            .conversations
            .iter()
            .find(|conversation| return conversation.id == active)
            .cloned();
    }

    /// Returns false when no conversation has that id.
    pub fn select_conversation(&self, id: &str) -> bool {
        let mut state = self.state();
        if !state.conversations.iter().any(|c| return c.id == id) {
            return false;
        }

        state.active = Some(id.to_string());
        return true;
    }

    pub fn is_generating(&self, id: &str) -> bool {
        return self.state().generating.contains(id);
    }

    pub fn rename_conversation(&self, id: &str, new_title: &str) -> bool {
        if new_title.trim().is_empty() {
            return false;
        }

        let mut state = self.state();
        let conversation = match state.conversations.iter_mut().find(|c| return c.id == id) {
            Some(conversation) => conversation,
            None => return false,
        };
        conversation.title = new_title.to_string();

        return true;
    }

    pub fn delete_conversation(&self, id: &str) -> bool {
        let mut state = self.state();
        let idx = match state.conversations.iter().position(|c| return c.id == id) {
            Some(idx) => idx,
            None => return false,
        };
        state.conversations.remove(idx);

        if state.active.as_deref() == Some(id) {
            state.active = state
                .conversations
                .first()
                .map(|conversation| return conversation.id.to_string());
        }

        tracing::debug!(conversation = id, "Deleted conversation");
        return true;
    }

    /// Appends the user's message, asks the gateway for a reply and appends
    /// that reply. Gateway failures never propagate, they become the fixed
    /// fallback reply.
    pub async fn send_message(&self, conversation_id: &str, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        let messages = {
            let mut guard = self.state();
            let state = &mut *guard;
            let conversation = match state
                .conversations
                .iter_mut()
                .find(|c| return c.id == conversation_id)
            {
                Some(conversation) => conversation,
                None => return SendOutcome::Ignored,
            };

            if state.generating.contains(conversation_id) {
                tracing::warn!(
                    conversation = conversation_id,
                    "Reply still generating, rejecting message"
                );
                return SendOutcome::Busy;
            }

            conversation.messages.push(Message::new(Role::User, text));
            if conversation.messages.len() == 1 {
                conversation.title = Conversation::title_from(text);
            }

            state.generating.insert(conversation_id.to_string());
            conversation.messages.clone()
        };
        let generating = GeneratingGuard {
            store: self,
            id: conversation_id,
            armed: true,
        };

        let (reply, failed) = match self.gateway.respond(&messages).await {
            Ok(response) => (
                Message::new(Role::Assistant, &response.message.content),
                false,
            ),
            Err(err) => {
                tracing::warn!(
                    conversation = conversation_id,
                    error = %err,
                    "Replying with fallback message"
                );
                (Message::new(Role::Assistant, FALLBACK_REPLY), true)
            }
        };

        let mut guard = self.state();
        let state = &mut *guard;
        generating.release(state);

        // Replies land in the conversation they were generated for, even if
        // another one has been selected since.
        match state
            .conversations
            .iter_mut()
            .find(|c| return c.id == conversation_id)
        {
            Some(conversation) => conversation.messages.push(reply.clone()),
            None => {
                tracing::info!(
                    conversation = conversation_id,
                    "Conversation deleted before its reply arrived, dropping reply"
                );
            }
        }

        if failed {
            return SendOutcome::Failed(reply);
        }

        return SendOutcome::Replied(reply);
    }
}
