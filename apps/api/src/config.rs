use anyhow::{Context, Result};

/// Model identifier used when `LLM_MODEL` is unset. Groq's Llama endpoint
/// is the development default; any OpenAI-compatible model id works.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Only the API key is required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: require_env("LLM_API_KEY")?,
            llm_base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches process environment variables; keep it that
    // way so parallel test threads never race on them.
    #[test]
    fn test_defaults_apply_when_optional_vars_unset() {
        std::env::set_var("LLM_API_KEY", "test-key");
        std::env::remove_var("LLM_BASE_URL");
        std::env::remove_var("LLM_MODEL");
        std::env::remove_var("PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.llm_api_key, "test-key");
        assert_eq!(config.llm_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm_model, DEFAULT_MODEL);
        assert_eq!(config.port, 8000);
    }
}
