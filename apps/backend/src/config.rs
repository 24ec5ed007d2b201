//! Environment-based configuration.

use flashcard_core::DEFAULT_DECK_NAME;

/// Settings for a running service. Read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Key for the text-generation API. Generation endpoints are disabled without it.
    pub openai_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub deck_name: String,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            openai_key: None,
            openai_model: "gpt-4o".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            deck_name: DEFAULT_DECK_NAME.to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Build from environment variables, falling back to defaults.
    ///
    /// Recognized vars:
    /// - HOST, PORT: listen address
    /// - OPENAI_KEY: API key for flashcard generation
    /// - OPENAI_MODEL: chat model name
    /// - OPENAI_BASE_URL: API root, for compatible providers
    /// - DECK_NAME: default deck name for `.apkg` exports
    /// - MAX_UPLOAD_BYTES: request body limit for PDF uploads
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {value:?}"))?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value.parse().map_err(|_| {
                anyhow::anyhow!("MAX_UPLOAD_BYTES must be a byte count, got {value:?}")
            })?,
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            openai_key: lookup("OPENAI_KEY").filter(|key| !key.trim().is_empty()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: lookup("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            deck_name: lookup("DECK_NAME").unwrap_or(defaults.deck_name),
            max_upload_bytes,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.deck_name, "Studyly Flashcards");
        assert!(config.openai_key.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("OPENAI_KEY", "sk-test"),
            ("DECK_NAME", "Biology"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_key.as_deref(), Some("sk-test"));
        assert_eq!(config.deck_name, "Biology");
    }

    #[test]
    fn test_blank_key_is_treated_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_KEY", "  ")])).unwrap();
        assert!(config.openai_key.is_none());
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "http")]));
        assert!(result.is_err());
    }
}
