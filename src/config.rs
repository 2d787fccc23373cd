/// Runtime configuration
///
/// Everything the app needs from the outside world comes through a
/// `ConfigProvider`, so tests can hand in a map instead of touching the
/// process environment.

use std::collections::HashMap;
use thiserror::Error;

/// Default image-capable Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Default Gemini REST endpoint root
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment keys searched for the credential, in priority order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";

/// Startup configuration errors. These are fatal: the app refuses to start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is not set (expected one of: GEMINI_API_KEY, API_KEY)")]
    MissingApiKey,
}

/// Source of configuration values
pub trait ConfigProvider {
    /// Look up a raw value by key
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment
///
/// Call `dotenvy::dotenv()` before using this if a `.env` file should count.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Resolved configuration for the try-on client
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    /// Which variable the key came from (for logs; the key itself is never logged)
    pub api_key_source: &'static str,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Resolve configuration from a provider.
    ///
    /// Blank values count as missing.
    pub fn load(provider: &impl ConfigProvider) -> Result<Self, ConfigError> {
        let (api_key_source, api_key) = API_KEY_VARS
            .iter()
            .find_map(|var| non_empty(provider, var).map(|value| (*var, value)))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = non_empty(provider, MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = non_empty(provider, API_BASE_VAR)
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Config {
            api_key,
            api_key_source,
            model,
            api_base,
        })
    }
}

fn non_empty(provider: &impl ConfigProvider, key: &str) -> Option<String> {
    provider
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

// Keep the key out of Debug output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_key_source", &self.api_key_source)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = Config::load(&provider(&[]));
        assert_eq!(result, Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let result = Config::load(&provider(&[("GEMINI_API_KEY", "   ")]));
        assert_eq!(result, Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_defaults() {
        let config = Config::load(&provider(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_key_source, "GEMINI_API_KEY");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_falls_back_to_api_key() {
        let config = Config::load(&provider(&[("GEMINI_API_KEY", ""), ("API_KEY", "xyz")])).unwrap();
        assert_eq!(config.api_key, "xyz");
        assert_eq!(config.api_key_source, "API_KEY");
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::load(&provider(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "custom-model"),
            ("GEMINI_API_BASE", "http://localhost:8080/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.model, "custom-model");
        assert_eq!(config.api_base, "http://localhost:8080/v1");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::load(&provider(&[("GEMINI_API_KEY", "super-secret")])).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
    }
}
