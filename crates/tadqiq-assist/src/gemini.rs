//! # Gemini HTTP Client
//!
//! `TextAssistant` implementation against a Gemini-compatible
//! `generateContent` endpoint. One POST per call, no retries; the
//! `AssistService` wrapper owns the fallback behavior.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tadqiq_state::AuditTask;

use crate::traits::{AssistError, TextAssistant};

/// Default model, matching the dashboard's service configuration.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const ANALYZE_SYSTEM_INSTRUCTION: &str = "You are an expert internal audit AI assistant for the Madinah Regional Municipality. Your output must be professional, in Arabic, and actionable.";

/// HTTP client for a Gemini-compatible generative-text API.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (used by tests against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn generate(
        &self,
        prompt: String,
        system_instruction: Option<&str>,
    ) -> Result<String, AssistError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
        };

        debug!(model = %self.model, "generateContent request");
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistError::MalformedResponse(e.to_string()))?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl TextAssistant for GeminiClient {
    async fn suggest_awareness_message(&self, topic: &str) -> Result<String, AssistError> {
        let prompt = format!(
            "Create a professional awareness message in Arabic for municipality employees about the topic: {topic}. Include a title and a clear message body."
        );
        self.generate(prompt, None).await
    }

    async fn analyze_audit_progress(&self, tasks: &[AuditTask]) -> Result<String, AssistError> {
        let tasks_json = serde_json::to_string(tasks)
            .map_err(|e| AssistError::MalformedResponse(e.to_string()))?;
        let prompt = format!(
            "Analyze the following audit tasks and provide a professional Arabic summary for the General Director. Highlight risks and recommended actions. Tasks: {tasks_json}"
        );
        self.generate(prompt, Some(ANALYZE_SYSTEM_INSTRUCTION)).await
    }
}

// ─── Wire format ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    /// The first candidate's text parts, concatenated; empty when the
    /// response carries no candidates.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"عنوان"},{"text":" ونص"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "عنوان ونص");
    }

    #[test]
    fn test_empty_candidates_yield_empty_text() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), "");
    }

    #[test]
    fn test_request_serialization_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "سؤال".to_string(),
                }],
            }],
            system_instruction: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_none());
        assert_eq!(json["contents"][0]["parts"][0]["text"], "سؤال");
    }
}
