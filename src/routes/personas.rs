use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::AppError;
use crate::models::entities::MODEL_CATALOG;
use crate::models::responses::{
    ListModelsResponse, ListPersonasResponse, ModelResponse, PersonaDetail, PersonaSummary,
    SystemPromptResponse,
};
use crate::personas::{self, Persona};

fn to_summary(persona: &Persona) -> PersonaSummary {
    PersonaSummary {
        name: persona.name.to_string(),
        description: persona.description.to_string(),
        suggested_messages: persona
            .suggested_messages
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

impl From<&Persona> for PersonaDetail {
    fn from(p: &Persona) -> Self {
        Self {
            name: p.name.to_string(),
            description: p.description.to_string(),
            domain_keywords: p.domain_keywords.iter().map(|s| s.to_string()).collect(),
            common_phrases: p.common_phrases.iter().map(|s| s.to_string()).collect(),
            refusal_message: p.refusal_message.to_string(),
            suggested_messages: p.suggested_messages.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/personas",
    responses((status = 200, body = ListPersonasResponse, description = "List all personas")),
    tag = "Personas"
)]
pub async fn list_personas() -> Json<ListPersonasResponse> {
    let personas: Vec<PersonaSummary> = personas::all().iter().map(to_summary).collect();
    let total = personas.len();

    Json(ListPersonasResponse { personas, total })
}

#[utoipa::path(
    get,
    path = "/api/v1/personas/{name}",
    params(("name" = String, Path, description = "Persona display name")),
    responses(
        (status = 200, body = PersonaDetail, description = "Persona detail"),
        (status = 404, description = "Unknown persona"),
    ),
    tag = "Personas"
)]
pub async fn get_persona(Path(name): Path<String>) -> Result<Json<PersonaDetail>, AppError> {
    let persona = personas::lookup(&name)
        .ok_or_else(|| AppError::not_found(format!("Persona '{name}' not found")))?;

    Ok(Json(PersonaDetail::from(persona)))
}

#[utoipa::path(
    get,
    path = "/api/v1/personas/{name}/system-prompt",
    params(("name" = String, Path, description = "Persona display name")),
    responses(
        (status = 200, body = SystemPromptResponse, description = "Instruction prompt"),
        (status = 404, description = "Unknown persona"),
    ),
    tag = "Personas"
)]
pub async fn get_system_prompt(
    Path(name): Path<String>,
) -> Result<Json<SystemPromptResponse>, AppError> {
    let prompt = personas::instruction_prompt_for(&name)
        .ok_or_else(|| AppError::not_found(format!("Persona '{name}' not found")))?;

    Ok(Json(SystemPromptResponse {
        system_prompt: prompt.to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/models",
    responses((status = 200, body = ListModelsResponse, description = "Available completion models")),
    tag = "Models"
)]
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ListModelsResponse> {
    Json(ListModelsResponse {
        models: MODEL_CATALOG
            .iter()
            .map(|m| ModelResponse {
                id: m.id.to_string(),
                label: m.label.to_string(),
            })
            .collect(),
        default_model: state.completions.default_model().to_string(),
    })
}
