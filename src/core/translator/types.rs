//! Wire types for the generative-language API
//!
//! Request and response bodies for the `generateContent` endpoint. The
//! response schema constrains the model to emit exactly the four string
//! fields of a `TranslationResult`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Schema,
}

/// Minimal subset of the API's OpenAPI-style schema object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<&'static str, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<&'static str>>,
}

impl Schema {
    fn string(description: Option<&'static str>) -> Self {
        Schema {
            schema_type: "STRING",
            description,
            properties: None,
            required: None,
        }
    }

    /// Output schema for a translation: four required string fields.
    pub fn translation_result() -> Self {
        let mut properties = BTreeMap::new();
        properties.insert("original", Schema::string(None));
        properties.insert("translated", Schema::string(None));
        properties.insert("sourceLang", Schema::string(Some("'vi' or 'zh'")));
        properties.insert("targetLang", Schema::string(Some("'vi' or 'zh'")));
        Schema {
            schema_type: "OBJECT",
            description: None,
            properties: Some(properties),
            required: Some(vec!["original", "translated", "sourceLang", "targetLang"]),
        }
    }
}

impl GenerateContentRequest {
    pub fn translation(text: &str) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(translation_prompt(text)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: Schema::translation_result(),
            },
        }
    }
}

fn translation_prompt(text: &str) -> String {
    format!(
        "Translate the following text between Vietnamese and Traditional Chinese.\n\
         If the input is Vietnamese, translate to Traditional Chinese.\n\
         If the input is Chinese, translate to Vietnamese.\n\
         Input text: \"{}\"",
        text
    )
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, trimmed. `None` when the
    /// model answered with nothing usable.
    pub fn text_payload(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
