use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ── Enums ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub enum MessageRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

// ── Entities ──

/// One turn of a conversation. `refused` marks assistant turns produced by
/// the boundary gate rather than the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: String,
    pub conversation_id: String,
    pub role: MessageRole,
    pub content: String,
    pub refused: bool,
    pub token_count: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// A session-scoped conversation. Lives only in process memory; nothing
/// survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub persona_name: String,
    pub model: String,
    pub messages: Vec<StoredMessage>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ── Model catalog ──

/// Completion models offered in the UI selector.
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
}

pub static MODEL_CATALOG: [ModelInfo; 3] = [
    ModelInfo {
        id: "llama-3.1-8b-instant",
        label: "LLaMA 3.1 8B (Fast)",
    },
    ModelInfo {
        id: "llama-3.3-70b-versatile",
        label: "LLaMA 3.3 70B (Powerful)",
    },
    ModelInfo {
        id: "qwen/qwen3-32b",
        label: "Qwen 3 32B",
    },
];

pub fn is_known_model(id: &str) -> bool {
    MODEL_CATALOG.iter().any(|m| m.id == id)
}
