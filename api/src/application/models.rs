use std::fmt::Write;

use pantrychef_core::{
    domain::common::PantryChefConfig,
    infrastructure::llm::{GeminiLLMClient, GeminiModel},
};

use crate::args::Args;

/// Fetches the models usable for recipe generation and renders them for the
/// terminal.
pub async fn list_models(args: &Args) -> Result<String, anyhow::Error> {
    let config = PantryChefConfig::from(args.clone());
    let client = GeminiLLMClient::new(&config.llm)?;

    let models = client.list_models().await?;
    tracing::debug!("Found {} models supporting generateContent", models.len());

    Ok(render_models(&models, &config.llm.gemini_model))
}

fn render_models(models: &[GeminiModel], configured: &str) -> String {
    let mut out = String::from("Available Gemini models:\n");

    if models.is_empty() {
        out.push_str("\n(none support generateContent)\n");
    }

    for model in models {
        let marker = if model.id() == configured { " (configured)" } else { "" };
        let _ = writeln!(out, "\n{}{}", model.id(), marker);
        if let Some(display_name) = &model.display_name {
            let _ = writeln!(out, "   Display name: {display_name}");
        }
        if let Some(description) = &model.description {
            let _ = writeln!(out, "   Description: {description}");
        }
        let _ = writeln!(
            out,
            "   Methods: {}",
            model.supported_generation_methods.join(", ")
        );
    }

    let _ = writeln!(out, "\nSet GEMINI_MODEL to one of the names above.");
    out
}
