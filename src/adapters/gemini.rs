//! Hosted text completion over the Gemini `generateContent` REST endpoint

use serde::Deserialize;
use serde_json::json;

use crate::core::ports::{CompletionError, TextCompletion};
use crate::core::services::chat::SYSTEM_INSTRUCTION;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini-backed [`TextCompletion`]
#[derive(Debug)]
pub struct GeminiCompletion {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl GeminiCompletion {
    /// Client for `model`; without an API key every call is
    /// [`CompletionError::Unconfigured`]
    pub fn new(
        model: impl Into<String>,
        api_key: Option<String>,
        temperature: f32,
    ) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            temperature,
        })
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, reqwest::Error> {
        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.temperature },
        });

        let response: GenerateResponse = self
            .client
            .post(format!("{ENDPOINT}/{}:generateContent", self.model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        Ok(text)
    }
}

impl TextCompletion for GeminiCompletion {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(CompletionError::Unconfigured);
        };
        log::debug!("Asking {} ({} chars)", self.model, prompt.len());
        self.runtime
            .block_on(self.generate(api_key, prompt))
            .map_err(|err| CompletionError::Failed(err.to_string()))
    }
}
