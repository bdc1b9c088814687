use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::entities::is_known_model;
use crate::personas;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConversationRequest {
    #[validate(length(min = 1, message = "persona is required"))]
    pub persona: String,

    /// Completion model override; defaults to the configured model.
    pub model: Option<String>,
}

impl CreateConversationRequest {
    pub fn validate_persona(&self) -> Result<&'static personas::Persona, String> {
        personas::lookup(&self.persona)
            .ok_or_else(|| format!("Persona '{}' not found", self.persona))
    }

    pub fn validate_model(&self) -> Result<(), String> {
        match self.model.as_deref() {
            None => Ok(()),
            Some(id) if is_known_model(id) => Ok(()),
            Some(id) => Err(format!("Unknown model '{id}'")),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(length(max = 4000, message = "content exceeds 4000 characters"))]
    pub content: String,
}

impl SendMessageRequest {
    pub fn validate_content(&self) -> Result<&str, String> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err("content is required".into());
        }
        if content.chars().count() > 4000 {
            return Err("content exceeds 4000 characters".into());
        }
        Ok(content)
    }
}
