use std::env;

/// How the Gemini client authenticates. Mirrors the two deployment modes:
/// managed Vertex AI credentials in production, a plain API key for
/// development. Selection happens once at startup; nothing downstream of the
/// client changes based on the mode.
#[derive(Clone)]
pub enum GeminiAuth {
    /// Vertex AI endpoint scoped to a project and location, with a bearer
    /// token supplied by the environment.
    Vertex {
        project: String,
        location: String,
        access_token: String,
    },
    /// Public Generative Language API key.
    ApiKey(String),
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub search_webhook_url: String,
    pub gemini_model: String,
    pub gemini_auth: GeminiAuth,
}

impl Config {
    pub fn from_env() -> Self {
        let use_vertex = env::var("GOOGLE_GENAI_USE_VERTEXAI")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let gemini_auth = if use_vertex {
            let project = env::var("GOOGLE_CLOUD_PROJECT")
                .expect("GOOGLE_CLOUD_PROJECT must be set when Vertex AI is enabled");
            let location = env::var("GOOGLE_CLOUD_LOCATION")
                .unwrap_or_else(|_| "us-central1".to_string());
            let access_token = env::var("GOOGLE_VERTEX_ACCESS_TOKEN")
                .expect("GOOGLE_VERTEX_ACCESS_TOKEN must be set when Vertex AI is enabled");
            GeminiAuth::Vertex {
                project,
                location,
                access_token,
            }
        } else {
            let api_key = env::var("GOOGLE_API_KEY").expect(
                "GOOGLE_API_KEY must be set (or enable Vertex AI with GOOGLE_GENAI_USE_VERTEXAI=true)",
            );
            GeminiAuth::ApiKey(api_key)
        };

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./.db/orchestrator.db".to_string()),
            search_webhook_url: env::var("SEARCH_WEBHOOK_URL")
                .unwrap_or_else(|_| "http://n8n-mcp:5678/webhook/search-web".to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_auth,
        }
    }
}
