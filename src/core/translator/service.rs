use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::Translator;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::shared::types::TranslationResult;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// Lazy static HTTP client to reuse connection pool
static CLIENT: OnceLock<Client> = OnceLock::new();

fn get_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("chat-bridge-translator")
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

pub struct GeminiTranslator {
    settings: AppSettings,
}

impl GeminiTranslator {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.settings
            .gemini_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "No translation API key is configured. Provide GEMINI_API_KEY at build \
                     time or store one in the system keyring."
                        .to_string(),
                )
            })
    }
}

#[async_trait]
impl Translator for GeminiTranslator {
    async fn translate(&self, text: &str) -> AppResult<TranslationResult> {
        let api_key = self.api_key()?;
        let url = format!("{}/models/{}:generateContent", API_BASE, self.settings.model);

        let response = get_client()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::translation(text))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Translation API request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Configuration(format!(
                "The translation API rejected the credential ({})",
                status
            )));
        }
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "Translation API returned error: {}",
                status
            )));
        }

        let body = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("unreadable API envelope: {}", e)))?;

        let payload = body.text_payload().ok_or(AppError::EmptyResponse)?;
        parse_translation(&payload)
    }
}

/// Parse and validate the model's JSON payload against the output contract:
/// four string fields, language tags drawn from {vi, zh} and distinct.
pub fn parse_translation(payload: &str) -> AppResult<TranslationResult> {
    let result: TranslationResult = serde_json::from_str(payload)
        .map_err(|e| AppError::MalformedResponse(format!("schema mismatch: {}", e)))?;
    if result.source_lang == result.target_lang {
        return Err(AppError::MalformedResponse(format!(
            "source and target language are both '{:?}'",
            result.source_lang
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Lang;

    #[test]
    fn parses_valid_translation_payload() {
        let payload = r#"{"original":"你好","translated":"Xin chào","sourceLang":"zh","targetLang":"vi"}"#;
        let result = parse_translation(payload).unwrap();
        assert_eq!(result.original, "你好");
        assert_eq!(result.translated, "Xin chào");
        assert_eq!(result.source_lang, Lang::Zh);
        assert_eq!(result.target_lang, Lang::Vi);
    }

    #[test]
    fn rejects_non_json_payload() {
        let err = parse_translation("Xin chào!").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_payload_missing_required_field() {
        let payload = r#"{"original":"你好","sourceLang":"zh","targetLang":"vi"}"#;
        let err = parse_translation(payload).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_language_tag_outside_the_pair() {
        let payload = r#"{"original":"hello","translated":"hola","sourceLang":"en","targetLang":"es"}"#;
        let err = parse_translation(payload).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_identical_source_and_target() {
        let payload = r#"{"original":"你好","translated":"你好","sourceLang":"zh","targetLang":"zh"}"#;
        let err = parse_translation(payload).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn envelope_text_extraction_trims_and_rejects_blank() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  {\"a\":1}  "}]}}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.text_payload().unwrap(), r#"{"a":1}"#);

        let blank: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#)
                .unwrap();
        assert!(blank.text_payload().is_none());

        let empty: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.text_payload().is_none());
    }

    #[test]
    fn request_body_carries_prompt_and_strict_schema() {
        let body =
            serde_json::to_value(GenerateContentRequest::translation("Xin chào")).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Xin chào"));
        assert!(prompt.contains("Vietnamese"));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        let schema = &config["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["original", "translated", "sourceLang", "targetLang"]
        );
    }

    #[test]
    fn missing_api_key_fails_before_any_network_call() {
        let translator = GeminiTranslator::new(AppSettings {
            gemini_api_key: None,
            bridge_app_id: Some("app-id".to_string()),
            model: "test-model".to_string(),
        });
        let err = translator.api_key().unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
