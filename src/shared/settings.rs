//! Build-time application configuration
//!
//! The credential and the bridge application id are baked in at build time
//! (`option_env!`), with the runtime environment and the OS keyring as
//! fallbacks for development builds. A missing credential is not a startup
//! failure; it surfaces as a configuration error when a translation is
//! attempted.

use keyring::Entry;

const KEYRING_SERVICE: &str = "chat-bridge-translator";
const KEYRING_ACCOUNT: &str = "gemini_api_key";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Documented sample value; shipping a build that still carries it is a
/// configuration error, the same way the upstream mini-app refuses to run
/// with its sample bridge id.
pub const PLACEHOLDER_APP_ID: &str = "YOUR_BRIDGE_APP_ID";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub gemini_api_key: Option<String>,
    pub bridge_app_id: Option<String>,
    pub model: String,
}

impl AppSettings {
    pub fn load() -> Self {
        Self {
            gemini_api_key: resolve_api_key(),
            bridge_app_id: non_blank(option_env!("BRIDGE_APP_ID").map(str::to_string))
                .or_else(|| non_blank(std::env::var("BRIDGE_APP_ID").ok())),
            model: non_blank(std::env::var("TRANSLATOR_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

/// Credential lookup order: build-time substitution, runtime environment,
/// then the system keyring. Lookup failures fold into `None`; the caller
/// decides whether an absent key is an error.
fn resolve_api_key() -> Option<String> {
    if let Some(key) = non_blank(option_env!("GEMINI_API_KEY").map(str::to_string)) {
        return Some(key);
    }
    if let Some(key) = non_blank(std::env::var("GEMINI_API_KEY").ok()) {
        return Some(key);
    }
    match Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT) {
        Ok(entry) => entry.get_password().ok(),
        Err(_) => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("key".to_string())), Some("key".to_string()));
    }
}
