use serde::{Deserialize, Serialize};

use super::DraftError;

/// Generation parameters for one completion call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Black-box text-completion service consumed by the model drafter.
///
/// Drafting runs with sampling disabled, so implementations are expected to
/// return the same completion for the same prompt.
pub trait TextCompletionBackend: Send + Sync {
    /// Run one completion.
    fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, DraftError>;

    /// Probe whether the configured model is actually served.
    fn is_model_available(&self) -> Result<bool, DraftError>;
}

/// Ollama HTTP backend for local generation.
pub struct OllamaBackend {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaBackend {
    /// Create a backend pointing at an Ollama instance, with an explicit
    /// per-request timeout.
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, DraftError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DraftError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        })
    }

    /// The model this backend generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn list_models(&self) -> Result<Vec<String>, DraftError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                DraftError::BackendConnection(self.base_url.clone())
            } else {
                DraftError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DraftError::BackendError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TagsResponse = response
            .json()
            .map_err(|e| DraftError::ResponseDecoding(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

/// Deterministic generation: temperature 0, bounded length.
#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

impl TextCompletionBackend for OllamaBackend {
    fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, DraftError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: 0.0,
                num_predict: params.max_tokens,
            },
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                DraftError::BackendConnection(self.base_url.clone())
            } else if e.is_timeout() {
                DraftError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                DraftError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DraftError::BackendError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| DraftError::ResponseDecoding(e.to_string()))?;

        Ok(parsed.response)
    }

    fn is_model_available(&self) -> Result<bool, DraftError> {
        let models = self.list_models()?;
        Ok(models.iter().any(|m| m.starts_with(&self.model)))
    }
}

/// Mock backend for testing — returns a configurable completion.
pub struct MockBackend {
    completion: Result<String, String>,
    available: bool,
}

impl MockBackend {
    pub fn new(completion: &str) -> Self {
        Self {
            completion: Ok(completion.to_string()),
            available: true,
        }
    }

    /// A backend whose model probe reports "not served".
    pub fn unavailable() -> Self {
        Self {
            completion: Ok(String::new()),
            available: false,
        }
    }

    /// A backend whose completion call fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            completion: Err(message.to_string()),
            available: true,
        }
    }
}

impl TextCompletionBackend for MockBackend {
    fn complete(
        &self,
        _system: &str,
        _prompt: &str,
        _params: GenerationParams,
    ) -> Result<String, DraftError> {
        self.completion
            .clone()
            .map_err(DraftError::HttpClient)
    }

    fn is_model_available(&self) -> Result<bool, DraftError> {
        Ok(self.available)
    }
}
