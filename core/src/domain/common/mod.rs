use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct PantryChefConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl LLMConfig {
    pub fn new(gemini_api_key: String, gemini_model: String) -> Self {
        Self {
            gemini_api_key,
            gemini_model,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
