use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails with context if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// When true, the analyze endpoint returns a fixed placeholder payload
    /// and never calls the provider. Used for demos and offline testing.
    pub mock_analysis: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            mock_analysis: std::env::var("MOCK_ANALYSIS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    /// Configuration for router-level tests: mock mode on, no real credential.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            openai_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            mock_analysis: true,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
