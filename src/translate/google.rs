//! Google Cloud Translation v2 client.

use crate::error::{Result, YadtError};
use crate::translate::Translate;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com";

/// Translator backed by the Google Cloud Translation v2 REST API.
pub struct GoogleTranslator {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a new translator with the given API key.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Override the API endpoint (used by tests to point at a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize, Debug)]
struct TranslateResponse {
    data: Option<TranslateData>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    message: String,
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        debug!("Translating {} chars to {}", text.len(), target_lang);

        let request = TranslateRequest {
            q: text,
            target: target_lang,
            format: "text",
        };

        let url = format!(
            "{}/language/translate/v2?key={}",
            self.endpoint, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| YadtError::Api(format!("Translation request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| YadtError::Api(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(YadtError::Api(format!(
                "Translation API error ({}): {}",
                status, body
            )));
        }

        let parsed: TranslateResponse = serde_json::from_str(&body)
            .map_err(|e| YadtError::Api(format!("Failed to parse translation response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(YadtError::Api(format!("Google error: {}", error.message)));
        }

        // A response without a translation falls back to the original text.
        let translated = parsed
            .data
            .and_then(|d| d.translations.into_iter().next())
            .and_then(|t| t.translated_text)
            .unwrap_or_else(|| text.to_string());

        Ok(translated)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
