use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    // App
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,

    // Groq (OpenAI-compatible completion service)
    pub groq_api_key: String,
    pub groq_api_base: String,
    pub groq_model: String,
    pub groq_max_tokens: u32,
    pub groq_temperature: f32,
    pub groq_timeout: u64,

    // Conversation limits
    pub history_context_turns: usize,
    pub session_max_messages: usize,

    // CORS
    pub cors_origins: String,

    // Logging
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or("Persona Chat API".into()),
            app_version: env::var("APP_VERSION").unwrap_or("1.0.0".into()),
            environment: env::var("ENVIRONMENT").unwrap_or("development".into()),
            debug: env::var("DEBUG")
                .unwrap_or("false".into())
                .parse()
                .unwrap_or(false),
            host: env::var("HOST").unwrap_or("0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or("8000".into())
                .parse()
                .unwrap_or(8000),

            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_api_base: env::var("GROQ_API_BASE")
                .unwrap_or("https://api.groq.com/openai/v1".into()),
            groq_model: env::var("GROQ_MODEL").unwrap_or("llama-3.1-8b-instant".into()),
            groq_max_tokens: env::var("GROQ_MAX_TOKENS")
                .unwrap_or("1024".into())
                .parse()
                .unwrap_or(1024),
            groq_temperature: env::var("GROQ_TEMPERATURE")
                .unwrap_or("0.7".into())
                .parse()
                .unwrap_or(0.7),
            groq_timeout: env::var("GROQ_TIMEOUT")
                .unwrap_or("30".into())
                .parse()
                .unwrap_or(30),

            history_context_turns: env::var("HISTORY_CONTEXT_TURNS")
                .unwrap_or("10".into())
                .parse()
                .unwrap_or(10),
            session_max_messages: env::var("SESSION_MAX_MESSAGES")
                .unwrap_or("20".into())
                .parse()
                .unwrap_or(20),

            cors_origins: env::var("CORS_ORIGINS").unwrap_or("*".into()),

            log_level: env::var("LOG_LEVEL").unwrap_or("info".into()),
            log_format: env::var("LOG_FORMAT").unwrap_or("json".into()),
        }
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        if self.cors_origins == "*" {
            return vec!["*".to_string()];
        }
        self.cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .collect()
    }
}
