use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::models::{ContactSubmission, Inspiration};
use crate::prompts::INSPIRATION_PROMPT;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("no Gemini API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        NetworkError::Transport(err.to_string())
    }
}

/// Produces a design challenge.
pub trait InspirationSource: Send + Sync {
    fn inspire(&self) -> BoxFuture<'_, Result<Inspiration, NetworkError>>;
}

/// A conversation that remembers its earlier turns.
pub trait ChatService: Send + Sync {
    fn send(&self, message: String) -> BoxFuture<'_, Result<String, NetworkError>>;
}

/// Accepts contact form submissions.
pub trait FormIntake: Send + Sync {
    fn submit(&self, submission: ContactSubmission) -> BoxFuture<'_, Result<(), NetworkError>>;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn inspiration_schema() -> Value {
    json!({
        "responseMimeType": "application/json",
        "responseSchema": {
            "type": "OBJECT",
            "properties": {
                "topic": { "type": "STRING" },
                "challenge": { "type": "STRING" }
            },
            "required": ["topic", "challenge"]
        }
    })
}

/// Models sometimes wrap JSON in a markdown fence even when asked not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        api_base: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NetworkError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
            model: model.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, NetworkError> {
        Self::new(
            settings.gemini_api_base.clone(),
            settings.gemini_model.clone(),
            settings.gemini_api_key.clone(),
            settings.request_timeout(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Runs one `generateContent` call and returns the first text part of the first candidate.
    pub async fn generate_content(
        &self,
        contents: &[Content],
        system_instruction: Option<&str>,
        generation_config: Option<Value>,
    ) -> Result<String, NetworkError> {
        let api_key = self.api_key.as_deref().ok_or(NetworkError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );
        let request = GenerateRequest {
            contents,
            system_instruction: system_instruction.map(|text| Content {
                role: None,
                parts: vec![Part {
                    text: Some(text.to_string()),
                }],
            }),
            generation_config,
        };

        info!(model = %self.model, turns = contents.len(), "gemini request");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "gemini request failed");
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| NetworkError::Malformed(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| NetworkError::Malformed("response had no text".to_string()))
    }

    /// Asks for a `{topic, challenge}` pair using a structured response schema.
    pub async fn design_inspiration(&self) -> Result<Inspiration, NetworkError> {
        let contents = [Content::user(INSPIRATION_PROMPT)];
        let text = self
            .generate_content(&contents, None, Some(inspiration_schema()))
            .await?;
        let inspiration: Inspiration = serde_json::from_str(strip_code_fence(&text))
            .map_err(|e| NetworkError::Malformed(e.to_string()))?;
        if inspiration.topic.trim().is_empty() || inspiration.challenge.trim().is_empty() {
            return Err(NetworkError::Malformed("empty topic or challenge".to_string()));
        }
        info!(topic = %inspiration.topic, "inspiration received");
        Ok(inspiration)
    }
}

impl InspirationSource for GeminiClient {
    fn inspire(&self) -> BoxFuture<'_, Result<Inspiration, NetworkError>> {
        self.design_inspiration().boxed()
    }
}

/// Chat session on top of `GeminiClient`. Only turns that got an answer are kept.
pub struct GeminiChat {
    client: Arc<GeminiClient>,
    system_instruction: String,
    history: Mutex<Vec<Content>>,
}

impl GeminiChat {
    pub fn new(client: Arc<GeminiClient>, system_instruction: impl Into<String>) -> Self {
        Self {
            client,
            system_instruction: system_instruction.into(),
            history: Mutex::new(Vec::new()),
        }
    }

    pub async fn send_message(&self, message: String) -> Result<String, NetworkError> {
        // Held across the call so turns stay in order.
        let mut history = self.history.lock().await;
        let mut contents = history.clone();
        contents.push(Content::user(message.clone()));

        let reply = self
            .client
            .generate_content(&contents, Some(&self.system_instruction), None)
            .await?;

        history.push(Content::user(message));
        history.push(Content::model(reply.clone()));
        Ok(reply)
    }

    pub async fn turns(&self) -> usize {
        self.history.lock().await.len()
    }
}

impl ChatService for GeminiChat {
    fn send(&self, message: String) -> BoxFuture<'_, Result<String, NetworkError>> {
        self.send_message(message).boxed()
    }
}

/// Posts contact submissions to a Formspree form.
pub struct FormspreeClient {
    client: Client,
    endpoint: String,
}

impl FormspreeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, NetworkError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, NetworkError> {
        Self::new(settings.form_endpoint.clone(), settings.request_timeout())
    }

    pub async fn post(&self, submission: ContactSubmission) -> Result<(), NetworkError> {
        info!(endpoint = %self.endpoint, "submitting contact form");
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&submission)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "contact form accepted");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "contact form rejected by endpoint");
        Err(NetworkError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl FormIntake for FormspreeClient {
    fn submit(&self, submission: ContactSubmission) -> BoxFuture<'_, Result<(), NetworkError>> {
        self.post(submission).boxed()
    }
}
