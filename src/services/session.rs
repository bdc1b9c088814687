use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::entities::{Conversation, MessageRole, StoredMessage};

/// In-memory conversation sessions, keyed by conversation id.
///
/// Conversations are deliberately ephemeral: nothing is written to disk and
/// the store is dropped with the process. Safe for concurrent sessions; each
/// entry is only touched under its own map shard.
pub struct SessionStore {
    conversations: DashMap<String, Conversation>,
    max_messages: usize,
    context_turns: usize,
}

impl SessionStore {
    pub fn new(max_messages: usize, context_turns: usize) -> Self {
        Self {
            conversations: DashMap::new(),
            max_messages,
            context_turns,
        }
    }

    pub fn create(&self, persona_name: &str, model: &str) -> Conversation {
        let now = Utc::now().naive_utc();
        let conversation = Conversation {
            id: Uuid::new_v4().to_string(),
            persona_name: persona_name.to_string(),
            model: model.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.conversations
            .insert(conversation.id.clone(), conversation.clone());
        conversation
    }

    pub fn get(&self, id: &str) -> Option<Conversation> {
        self.conversations.get(id).map(|c| c.value().clone())
    }

    /// Append a turn. The transcript is capped at `max_messages`, oldest
    /// turns dropped first.
    pub fn append(
        &self,
        id: &str,
        role: MessageRole,
        content: &str,
        refused: bool,
        token_count: Option<i32>,
    ) -> Option<StoredMessage> {
        let mut conversation = self.conversations.get_mut(id)?;

        let message = StoredMessage {
            id: Uuid::new_v4().to_string(),
            conversation_id: id.to_string(),
            role,
            content: content.to_string(),
            refused,
            token_count,
            created_at: Utc::now().naive_utc(),
        };

        conversation.messages.push(message.clone());
        let overflow = conversation.messages.len().saturating_sub(self.max_messages);
        conversation.messages.drain(..overflow);
        conversation.updated_at = message.created_at;

        Some(message)
    }

    /// The trailing window of turns sent to the completion service as
    /// conversation context.
    pub fn history_for_context(&self, id: &str) -> Vec<StoredMessage> {
        let Some(conversation) = self.conversations.get(id) else {
            return Vec::new();
        };
        let skip = conversation
            .messages
            .len()
            .saturating_sub(self.context_turns);
        conversation.messages[skip..].to_vec()
    }

    /// Remove a conversation; returns how many messages it held.
    pub fn delete(&self, id: &str) -> Option<usize> {
        self.conversations
            .remove(id)
            .map(|(_, conversation)| conversation.messages.len())
    }

    /// (active conversations, total stored messages) for the status endpoint.
    pub fn stats(&self) -> (usize, usize) {
        let conversations = self.conversations.len();
        let messages = self
            .conversations
            .iter()
            .map(|c| c.messages.len())
            .sum();
        (conversations, messages)
    }
}
