use std::time::Duration;

use clap::{Parser, builder::NonEmptyStringValueParser};
use pantrychef_core::domain::{
    common::{DEFAULT_GEMINI_BASE_URL, LLMConfig, PantryChefConfig},
    recipe::DEFAULT_MAX_INGREDIENTS,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantrychef-api", version, about = "Recipe generation API backed by Gemini")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Print the Gemini models that support generateContent and exit.
    #[arg(long = "list-models", default_value_t = false)]
    pub list_models: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(
        long = "root-path",
        env = "ROOT_PATH",
        default_value = "",
        value_parser = parse_root_path
    )]
    pub root_path: String,

    /// Comma separated list. Empty allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Upstream request timeout in seconds.
    #[arg(
        long = "request-timeout",
        env = "REQUEST_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecipeArgs {
    #[arg(
        long = "max-ingredients",
        env = "MAX_INGREDIENTS",
        default_value_t = DEFAULT_MAX_INGREDIENTS,
        value_parser = parse_max_ingredients
    )]
    pub max_ingredients: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

/// Normalises a route prefix to either `""` or `/segment[/segment...]`.
fn parse_root_path(value: &str) -> Result<String, String> {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if let Some(c) = trimmed
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '{' | '}' | '*' | '?' | '#'))
    {
        return Err(format!("root path may not contain {c:?}"));
    }
    if trimmed.split('/').any(str::is_empty) {
        return Err("root path may not contain empty segments".to_string());
    }

    Ok(format!("/{trimmed}"))
}

fn parse_max_ingredients(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(max) => Ok(max),
        Err(e) => Err(e.to_string()),
    }
}

impl From<Args> for PantryChefConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                base_url: args.llm.gemini_base_url,
                request_timeout: Duration::from_secs(args.llm.request_timeout),
            },
        }
    }
}
