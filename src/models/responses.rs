use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{MessageRole, StoredMessage};

// ── Personas / models ──

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaSummary {
    pub name: String,
    pub description: String,
    pub suggested_messages: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaDetail {
    pub name: String,
    pub description: String,
    pub domain_keywords: Vec<String>,
    pub common_phrases: Vec<String>,
    pub refusal_message: String,
    pub suggested_messages: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListPersonasResponse {
    pub personas: Vec<PersonaSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SystemPromptResponse {
    pub system_prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelResponse {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListModelsResponse {
    pub models: Vec<ModelResponse>,
    pub default_model: String,
}

// ── Chat ──

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub refused: bool,
    pub token_count: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl From<StoredMessage> for MessageResponse {
    fn from(m: StoredMessage) -> Self {
        Self {
            id: m.id,
            role: m.role,
            content: m.content,
            refused: m.refused,
            token_count: m.token_count,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationResponse {
    pub id: String,
    pub persona: String,
    pub model: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub message_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendMessageResponse {
    pub user_message: MessageResponse,
    pub assistant_message: MessageResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListMessagesResponse {
    pub conversation_id: String,
    pub messages: Vec<MessageResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteConversationResponse {
    pub success: bool,
    pub deleted_conversation_id: String,
    pub deleted_messages_count: usize,
}

// ── Health / Status ──

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: NaiveDateTime,
    pub services: std::collections::HashMap<String, ServiceHealth>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SystemStatistics {
    pub active_conversations: usize,
    pub total_messages: usize,
    pub registered_personas: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub demo_mode: bool,
    pub statistics: SystemStatistics,
    pub timestamp: NaiveDateTime,
}
