use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::ai::types::AiError;
use crate::ai::TextGenerator;
use crate::config::{Config, GeminiAuth};

/// Client for the Gemini `generateContent` REST API.
///
/// Supports both authentication modes from [`GeminiAuth`]: the public
/// Generative Language endpoint with an API key header, or a regional
/// Vertex AI endpoint with a bearer token. The mode is baked into the
/// endpoint and headers at construction; requests are identical after that.
pub struct GeminiClient {
    client: Client,
    auth_headers: header::HeaderMap,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let mut auth_headers = header::HeaderMap::new();
        auth_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let endpoint = match &config.gemini_auth {
            GeminiAuth::ApiKey(key) => {
                let value = header::HeaderValue::from_str(key)
                    .map_err(|e| format!("Invalid API key format: {}", e))?;
                auth_headers.insert("x-goog-api-key", value);
                log::info!(
                    "Gemini client using API key auth, model {}",
                    config.gemini_model
                );
                format!(
                    "https://generativelanguage.googleapis.com/v1/models/{}:generateContent",
                    config.gemini_model
                )
            }
            GeminiAuth::Vertex {
                project,
                location,
                access_token,
            } => {
                let value = header::HeaderValue::from_str(&format!("Bearer {}", access_token))
                    .map_err(|e| format!("Invalid access token format: {}", e))?;
                auth_headers.insert(header::AUTHORIZATION, value);
                log::info!(
                    "Gemini client using Vertex AI auth, project {}, location {}, model {}",
                    project,
                    location,
                    config.gemini_model
                );
                format!(
                    "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent",
                    location = location,
                    project = project,
                    model = config.gemini_model
                )
            }
        };

        Ok(Self {
            client: crate::http::shared_client().clone(),
            auth_headers,
            endpoint,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Issue a single `generateContent` request. One attempt, no retry: a
    /// provider failure is fatal for the request that triggered it.
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        log::debug!("Sending generateContent request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.auth_headers.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::new(format!("Gemini API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(parsed) = serde_json::from_str::<GeminiErrorResponse>(&error_text) {
                return Err(AiError::with_status(
                    format!("Gemini API error: {}", parsed.error.message),
                    status.as_u16(),
                ));
            }
            return Err(AiError::with_status(
                format!(
                    "Gemini API returned error status: {}, body: {}",
                    status, error_text
                ),
                status.as_u16(),
            ));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::new(format!("Failed to parse Gemini response: {}", e)))?;

        // Concatenate all text parts across candidates
        let text: String = data
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err(AiError::new("Gemini API returned no content"));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some("hello".to_string()),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "four"}]}}
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        assert_eq!(text, "four");
    }

    #[test]
    fn test_error_body_deserialization() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;
        let parsed: GeminiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }

    #[test]
    fn test_endpoint_for_api_key_mode() {
        let config = Config {
            port: 8080,
            database_path: ":memory:".to_string(),
            search_webhook_url: "http://localhost/webhook".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_auth: GeminiAuth::ApiKey("test-key".to_string()),
        };

        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint,
            "https://generativelanguage.googleapis.com/v1/models/gemini-2.5-flash:generateContent"
        );
        assert!(client.auth_headers.contains_key("x-goog-api-key"));
    }

    #[test]
    fn test_endpoint_for_vertex_mode() {
        let config = Config {
            port: 8080,
            database_path: ":memory:".to_string(),
            search_webhook_url: "http://localhost/webhook".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_auth: GeminiAuth::Vertex {
                project: "my-project".to_string(),
                location: "us-central1".to_string(),
                access_token: "ya29.token".to_string(),
            },
        };

        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint,
            "https://us-central1-aiplatform.googleapis.com/v1/projects/my-project/locations/us-central1/publishers/google/models/gemini-2.5-flash:generateContent"
        );
        assert!(client.auth_headers.contains_key("authorization"));
    }
}
