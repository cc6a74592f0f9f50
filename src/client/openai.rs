use crate::client::TagProvider;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, REQUEST_TIMEOUT_SECS, TAGGING_SYSTEM_PROMPT, TAG_SCHEMA_NAME,
};
use crate::errors::TagError;
use crate::models::FilePayload;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

/// Tag provider backed by the OpenAI Responses API
///
/// Issues one strict-schema request per call: the file rides along as a
/// base64 data URI and the model must answer with `{"tags": [...]}`.
pub struct OpenAiTagProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiTagProvider {
    /// Create a new provider with the default model and endpoint
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            client: reqwest::Client::new(),
        }
    }

    /// Set the model used for tag extraction
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Set the API base URL (e.g. for a compatible proxy)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request(&self, payload: &FilePayload) -> ResponsesRequest {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&payload.bytes);
        let file_data = format!("data:{};base64,{}", payload.media_type, b64);

        ResponsesRequest {
            model: self.model.clone(),
            input: vec![
                InputMessage {
                    role: "system",
                    content: MessageContent::Text(TAGGING_SYSTEM_PROMPT.to_string()),
                },
                InputMessage {
                    role: "user",
                    content: MessageContent::Items(vec![InputItem::InputFile {
                        filename: payload.file_name.clone(),
                        file_data,
                    }]),
                },
            ],
            text: TextOptions {
                format: OutputFormat {
                    kind: "json_schema",
                    name: TAG_SCHEMA_NAME,
                    strict: true,
                    schema: tag_schema(),
                },
            },
        }
    }
}

#[async_trait::async_trait]
impl TagProvider for OpenAiTagProvider {
    async fn extract_tags(&self, payload: &FilePayload) -> Result<Vec<String>, TagError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(TagError::Configuration)?;

        let url = format!("{}/responses", self.base_url);
        let request = self.build_request(payload);

        tracing::debug!(file = %payload.file_name, model = %self.model, "requesting tags");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| TagError::Upstream(format!("Failed to reach tagging API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TagError::Upstream(format!(
                "Tagging API returned error {}: {}",
                status, body
            )));
        }

        let envelope: ResponsesEnvelope = response.json().await.map_err(|_| TagError::Parse)?;
        let output_text = envelope.output_text().ok_or(TagError::Parse)?;

        parse_tags(&output_text)
    }
}

/// Decode the model's output text into the tag list
fn parse_tags(output_text: &str) -> Result<Vec<String>, TagError> {
    let payload: TagPayload = serde_json::from_str(output_text).map_err(|_| TagError::Parse)?;
    Ok(payload.tags)
}

/// Strict output schema: a single `tags` array of strings, nothing else
fn tag_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["tags"],
        "additionalProperties": false
    })
}

#[derive(Serialize)]
struct ResponsesRequest {
    model: String,
    input: Vec<InputMessage>,
    text: TextOptions,
}

#[derive(Serialize)]
struct InputMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Items(Vec<InputItem>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InputItem {
    InputFile { filename: String, file_data: String },
}

#[derive(Serialize)]
struct TextOptions {
    format: OutputFormat,
}

#[derive(Serialize)]
struct OutputFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct ResponsesEnvelope {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<OutputPart>,
}

#[derive(Deserialize)]
struct OutputPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct TagPayload {
    tags: Vec<String>,
}

impl ResponsesEnvelope {
    /// Concatenated text of all output_text parts across message items
    fn output_text(&self) -> Option<String> {
        let text: String = self
            .output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .map(|part| part.text.as_str())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
