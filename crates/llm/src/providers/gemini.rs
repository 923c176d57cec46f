//! Google Gemini provider implementation.
//!
//! Uses the `generateContent` and `streamGenerateContent` endpoints of the
//! Generative Language API:
//! https://ai.google.dev/api/generate-content

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmStream, LlmStreamChunk, LlmUsage};
use campus_core::{AppError, AppResult};
use futures::StreamExt;
use serde::{Deserialize, Serialize};

/// Default base URL for the Generative Language API.
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "systemInstruction")]
    system_instruction: Option<SystemInstruction>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

/// Gemini API response format (shared by both endpoints).
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(default, rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UsageMetadata {
    #[serde(default, rename = "promptTokenCount")]
    prompt_token_count: u32,
    #[serde(default, rename = "candidatesTokenCount")]
    candidates_token_count: u32,
}

/// Gemini LLM client.
pub struct GeminiClient {
    /// Base URL for the API
    base_url: String,

    /// API key, appended as a query parameter
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Fails if the key is empty; the key must always come from the
    /// environment, never from source.
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, GEMINI_API_URL)
    }

    /// Create a new Gemini client with a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> AppResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::Llm("Gemini API key is empty".to_string()));
        }

        Ok(Self {
            base_url: base_url.into(),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    /// Convert LlmRequest to Gemini format.
    fn to_gemini_request(&self, request: &LlmRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            }),
            system_instruction: request.system.as_ref().map(|system| SystemInstruction {
                parts: vec![Part {
                    text: system.clone(),
                }],
            }),
        }
    }

    /// Extract the generated text from a Gemini response.
    fn extract_text(response: &GeminiResponse) -> AppResult<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| AppError::Llm("Empty response from Gemini".to_string()))
    }

    fn usage_from(metadata: Option<&UsageMetadata>) -> LlmUsage {
        metadata
            .map(|m| LlmUsage::new(m.prompt_token_count, m.candidates_token_count))
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::info!("Sending completion request to Gemini");

        let gemini_request = self.to_gemini_request(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Gemini: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        let content = Self::extract_text(&gemini_response)?;
        let usage = Self::usage_from(gemini_response.usage_metadata.as_ref());

        tracing::info!("Received completion from Gemini");

        Ok(LlmResponse {
            content,
            model: request.model.clone(),
            usage,
            done: true,
        })
    }

    async fn stream(&self, request: &LlmRequest) -> AppResult<LlmStream> {
        tracing::info!("Starting streaming request to Gemini");

        let gemini_request = self.to_gemini_request(request);
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url, request.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send streaming request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let model = request.model.clone();

        // The SSE body is a sequence of "data: <json>" lines
        let stream = response.bytes_stream().map(move |result| {
            let bytes = result.map_err(|e| AppError::Llm(format!("Stream error: {}", e)))?;

            let text = String::from_utf8_lossy(&bytes);
            let chunks: Vec<AppResult<LlmStreamChunk>> = text
                .lines()
                .filter_map(|line| line.strip_prefix("data:"))
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| {
                    let gemini_response: GeminiResponse = serde_json::from_str(line)
                        .map_err(|e| AppError::Llm(format!("Failed to parse chunk: {}", e)))?;

                    let content = gemini_response
                        .candidates
                        .first()
                        .and_then(|c| c.content.as_ref())
                        .and_then(|content| content.parts.first())
                        .map(|part| part.text.clone())
                        .unwrap_or_default();

                    let done = gemini_response
                        .candidates
                        .first()
                        .map(|c| c.finish_reason.is_some())
                        .unwrap_or(false);

                    Ok(LlmStreamChunk {
                        content,
                        model: model.clone(),
                        done,
                        usage: if done {
                            Some(GeminiClient::usage_from(
                                gemini_response.usage_metadata.as_ref(),
                            ))
                        } else {
                            None
                        },
                    })
                })
                .collect();

            Ok(futures::stream::iter(chunks))
        });

        Ok(Box::pin(stream.flat_map(|result| match result {
            Ok(chunks) => chunks,
            Err(e) => futures::stream::iter(vec![Err(e)]),
        })))
    }
}
