use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Persona Chat API",
        version = "1.0.0",
        description = "Personality-constrained chat assistant with a client-side domain gate"
    ),
    paths(
        // Health
        super::health::root,
        super::health::health,
        super::health::status,
        // Personas
        super::personas::list_personas,
        super::personas::get_persona,
        super::personas::get_system_prompt,
        super::personas::list_models,
        // Chat
        super::chat::create_conversation,
        super::chat::list_messages,
        super::chat::send_message,
        super::chat::stream_message,
        super::chat::delete_conversation,
    ),
    components(schemas(
        // Requests
        crate::models::requests::CreateConversationRequest,
        crate::models::requests::SendMessageRequest,
        // Responses
        crate::models::responses::PersonaSummary,
        crate::models::responses::PersonaDetail,
        crate::models::responses::ListPersonasResponse,
        crate::models::responses::SystemPromptResponse,
        crate::models::responses::ModelResponse,
        crate::models::responses::ListModelsResponse,
        crate::models::responses::MessageResponse,
        crate::models::responses::ConversationResponse,
        crate::models::responses::SendMessageResponse,
        crate::models::responses::ListMessagesResponse,
        crate::models::responses::DeleteConversationResponse,
        crate::models::responses::ServiceHealth,
        crate::models::responses::HealthResponse,
        crate::models::responses::SystemStatistics,
        crate::models::responses::StatusResponse,
        // Core
        crate::boundary::BoundaryDecision,
    ))
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/explorer").url("/openapi.json", ApiDoc::openapi())
}
