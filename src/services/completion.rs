use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, ChatCompletionResponseStream,
    CreateChatCompletionRequestArgs,
};
use futures::StreamExt;
use tokio::sync::watch;
use tokio::time::timeout;

use crate::error::AppError;
use crate::models::entities::{MessageRole, StoredMessage};

/// API-key value treated the same as an absent key.
pub const PLACEHOLDER_API_KEY: &str = "demo";

/// OpenAI-compatible streaming chat client pointed at Groq.
///
/// With no usable API key the client stays in demo mode: `is_configured()`
/// is false and callers must not attempt a network call.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client<OpenAIConfig>,
    default_model: String,
    max_tokens: u32,
    temperature: f32,
    idle_timeout: Duration,
    configured: bool,
}

impl CompletionClient {
    pub fn groq(
        http: reqwest::Client,
        api_key: &str,
        api_base: &str,
        model: &str,
        max_tokens: u32,
        temperature: f32,
        timeout_secs: u64,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        let client = Client::with_config(config).with_http_client(http);

        Self {
            client,
            default_model: model.to_string(),
            max_tokens,
            temperature,
            idle_timeout: Duration::from_secs(timeout_secs),
            configured: !api_key.is_empty() && api_key != PLACEHOLDER_API_KEY,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Canned reply for demo mode, where the registry and boundary gate keep
    /// working but no completion call is made.
    pub fn demo_reply(persona_name: &str) -> String {
        format!(
            "[demo mode] No completion service is configured, so the {persona_name} \
             can't generate a live reply. Set GROQ_API_KEY to enable real responses."
        )
    }

    /// Open a streaming completion: `[system] + history + [user]`.
    /// The returned stream is finite and single-pass.
    pub async fn stream_reply(
        &self,
        model: &str,
        instruction_prompt: &str,
        history: &[StoredMessage],
        user_message: &str,
    ) -> Result<ChatCompletionResponseStream, AppError> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::new();

        messages.push(ChatCompletionRequestMessage::System(
            ChatCompletionRequestSystemMessage {
                content: instruction_prompt.into(),
                name: None,
            },
        ));

        for msg in history {
            match msg.role {
                MessageRole::User => {
                    messages.push(ChatCompletionRequestMessage::User(
                        ChatCompletionRequestUserMessage {
                            content: ChatCompletionRequestUserMessageContent::Text(
                                msg.content.clone(),
                            ),
                            name: None,
                        },
                    ));
                }
                MessageRole::Assistant => {
                    messages.push(ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(msg.content.clone().into()),
                            name: None,
                            ..Default::default()
                        },
                    ));
                }
            }
        }

        messages.push(ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(user_message.to_string()),
                name: None,
            },
        ));

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .stream(true)
            .build()
            .map_err(|e| AppError::service_unavailable(format!("Failed to build request: {e}")))?;

        self.client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| AppError::service_unavailable(format!("AI API error: {e}")))
    }

    /// Drain the stream into a single reply buffer.
    ///
    /// The caller may flip `cancel` to stop consumption early; the partial
    /// buffer is then finalized and returned, as it is when the provider
    /// stalls past the idle timeout or breaks mid-reply. Only a failure
    /// before any content arrived is reported as an error.
    pub async fn collect_reply(
        &self,
        mut stream: ChatCompletionResponseStream,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<String, AppError> {
        let mut buffer = String::new();

        loop {
            let next = tokio::select! {
                _ = cancel.changed() => {
                    tracing::debug!("completion stream cancelled by caller");
                    break;
                }
                next = timeout(self.idle_timeout, stream.next()) => next,
            };

            match next {
                Err(_) => {
                    tracing::warn!("completion stream stalled, finalizing partial reply");
                    break;
                }
                Ok(None) => break,
                Ok(Some(Ok(chunk))) => {
                    for choice in &chunk.choices {
                        if let Some(delta) = &choice.delta.content {
                            buffer.push_str(delta);
                        }
                    }
                }
                Ok(Some(Err(e))) => {
                    if buffer.is_empty() {
                        return Err(AppError::service_unavailable(format!("AI API error: {e}")));
                    }
                    tracing::warn!(error = %e, "completion stream broke, finalizing partial reply");
                    break;
                }
            }
        }

        Ok(buffer)
    }
}

/// A completion that collapses to whitespace is a soft failure; callers
/// substitute a fallback notice rather than displaying a blank turn.
pub fn validate_reply(text: &str) -> bool {
    !text.trim().is_empty()
}

pub fn estimate_tokens(text: &str) -> i32 {
    (text.len() as f64 / 4.0).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> CompletionClient {
        CompletionClient::groq(
            reqwest::Client::new(),
            api_key,
            "https://api.groq.com/openai/v1",
            "llama-3.1-8b-instant",
            1024,
            0.7,
            30,
        )
    }

    #[test]
    fn missing_or_placeholder_key_means_demo_mode() {
        assert!(!client("").is_configured());
        assert!(!client("demo").is_configured());
        assert!(client("gsk_real_key").is_configured());
    }

    #[test]
    fn demo_reply_names_the_persona() {
        let reply = CompletionClient::demo_reply("Math Teacher");
        assert!(reply.contains("Math Teacher"));
        assert!(reply.contains("demo mode"));
    }

    #[test]
    fn reply_validation_rejects_blank_text() {
        assert!(!validate_reply(""));
        assert!(!validate_reply("   \n\t"));
        assert!(validate_reply("2 + 2 = 4"));
    }

    #[test]
    fn token_estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }
}
