//! Best-effort translation capability
//!
//! Question labels and result headings can be localized for the student.
//! The call is strictly best-effort: any failure falls back to the source
//! text, and no error ever crosses this boundary to the user.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::TranslationError;

/// Language code of the source content
pub const SOURCE_LANG: &str = "en";

/// A translation provider
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError>;
}

/// Translate, falling back to the original text on any failure
pub async fn translate_or_original(translator: &dyn Translate, text: &str, target_lang: &str) -> String {
    let target = target_lang.trim();
    if target.is_empty() || target.eq_ignore_ascii_case(SOURCE_LANG) {
        return text.to_string();
    }

    match translator.translate(text, target).await {
        Ok(translated) => translated,
        Err(e) => {
            debug!("translation to {target} failed, keeping source text: {e}");
            text.to_string()
        }
    }
}

/// No-op provider: always returns the source text.
/// Used when no translation endpoint is configured, and in tests.
pub struct NoopTranslator;

#[async_trait]
impl Translate for NoopTranslator {
    async fn translate(&self, text: &str, _target_lang: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// HTTP provider speaking the LibreTranslate JSON protocol
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl Translate for HttpTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let mut body = json!({
            "q": text,
            "source": "auto",
            "target": target_lang,
            "format": "text",
        });
        if let Some(key) = &self.api_key {
            body["api_key"] = json!(key);
        }

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        let parsed: TranslateResponse = response.json().await?;
        parsed
            .translated_text
            .ok_or(TranslationError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that always fails, for exercising the fallback path
    struct FailingTranslator;

    #[async_trait]
    impl Translate for FailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _target_lang: &str,
        ) -> Result<String, TranslationError> {
            Err(TranslationError::Status(503))
        }
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_source_text() {
        let text = translate_or_original(&FailingTranslator, "Which careers do you like?", "hi").await;
        assert_eq!(text, "Which careers do you like?");
    }

    #[tokio::test]
    async fn test_english_target_skips_translation() {
        let text = translate_or_original(&FailingTranslator, "hello", "en").await;
        assert_eq!(text, "hello");
        let text = translate_or_original(&FailingTranslator, "hello", "").await;
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_noop_returns_input() {
        let translated = NoopTranslator.translate("hello", "ta").await.unwrap();
        assert_eq!(translated, "hello");
    }
}
