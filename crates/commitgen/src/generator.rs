use crate::config::GeminiOptions;
use crate::prelude::*;
use async_trait::async_trait;
use commitgen_core::gemini::{
    build_request, describe_api_error, endpoint_url, extract_text, GenerateContentResponse,
};
use commitgen_core::{build_prompt, sanitize_message, GenerationRequest, GenerationResult};
use std::time::Duration;

/// Anything that can turn a prompt into model text.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini `generateContent` client.
///
/// Holds a single `reqwest::Client`; build it once and share it.
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(options: &GeminiOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = options.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            url: endpoint_url(&options.base_url, &options.model),
            api_key: options.api_key.clone(),
        })
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(prompt))
            .send()
            .await
            .context("Failed to reach Gemini")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!(
                "Gemini returned status {}: {}",
                status,
                describe_api_error(&body)
            ));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        Ok(extract_text(payload)?)
    }
}

/// Run the whole pipeline for one request: validate, prompt, call, sanitize.
///
/// The generator is only called for a valid diff. Upstream failures are
/// logged here and collapsed into [`Error::Upstream`].
pub async fn generate_message(
    generator: &dyn Generator,
    request: &GenerationRequest,
) -> Result<GenerationResult, Error> {
    let diff = request.diff()?;
    let prompt = build_prompt(diff);

    let raw = generator.generate(&prompt).await.map_err(|e| {
        log::error!("Commit message generation failed: {e:#}");
        Error::Upstream(format!("{e:#}"))
    })?;

    Ok(GenerationResult {
        message: sanitize_message(&raw),
    })
}
