use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeSummary},
};

const REQUIRED_RECIPE_FIELDS: [&str; 3] = ["recipe_name", "ingredients", "instructions"];
const SUGGESTIONS_FIELD: &str = "recipes";

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(?:json)?\s*").expect("valid opening fence pattern"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("valid closing fence pattern"));

/// Trims the reply and drops a markdown code fence wrapped around it.
///
/// Only a fence opening the text and a fence closing it are removed. Backticks
/// anywhere else in the body are left alone.
pub fn strip_code_fences(raw_response: &str) -> &str {
    let trimmed = raw_response.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let body = match OPENING_FENCE.find(trimmed) {
        Some(fence) => &trimmed[fence.end()..],
        None => trimmed,
    };
    let body = match CLOSING_FENCE.find(body) {
        Some(fence) => &body[..fence.start()],
        None => body,
    };

    body.trim()
}

/// Turns a model reply into a [`Recipe`].
///
/// Text that is not JSON at all degrades into [`Recipe::fallback`] instead of
/// failing. JSON that lacks a required field, or whose required fields have
/// the wrong shape, is an error. Optional fields of an unexpected type are
/// kept as sent.
pub fn parse_recipe_response(raw_response: &str) -> Result<Recipe, CoreError> {
    let cleaned = strip_code_fences(raw_response);

    let parsed: Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("LLM reply is not valid JSON, using fallback recipe: {}", e);
            return Ok(Recipe::fallback(raw_response));
        }
    };

    let fields = as_object(parsed)?;
    for field in REQUIRED_RECIPE_FIELDS {
        ensure_field(&fields, field)?;
    }

    let recipe: Recipe = from_fields(fields)?;
    if recipe.instructions.is_empty() {
        return Err(CoreError::InvalidPayload(
            "instructions must contain at least one step".to_string(),
        ));
    }

    Ok(recipe)
}

/// Turns a model reply into recipe summaries.
///
/// Unlike [`parse_recipe_response`] there is no fallback: text that is not
/// JSON is an error.
pub fn parse_suggestions_response(raw_response: &str) -> Result<Vec<RecipeSummary>, CoreError> {
    let cleaned = strip_code_fences(raw_response);

    let parsed: Value = serde_json::from_str(cleaned).map_err(|e| {
        tracing::error!("Failed to parse LLM suggestions: {}", e);
        CoreError::MalformedResponse(e.to_string())
    })?;

    let mut fields = as_object(parsed)?;
    ensure_field(&fields, SUGGESTIONS_FIELD)?;

    let recipes = fields.remove(SUGGESTIONS_FIELD).unwrap_or_default();
    serde_json::from_value(recipes).map_err(|e| {
        tracing::error!("Invalid recipes format: {}", e);
        CoreError::InvalidPayload(format!("recipes: {e}"))
    })
}

fn as_object(value: Value) -> Result<Map<String, Value>, CoreError> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(CoreError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn ensure_field(fields: &Map<String, Value>, field: &str) -> Result<(), CoreError> {
    if fields.contains_key(field) {
        Ok(())
    } else {
        Err(CoreError::MissingField(field.to_string()))
    }
}

fn from_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        tracing::error!("Invalid recipe format: {}", e);
        CoreError::InvalidPayload(e.to_string())
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::recipe::entities::{
        FALLBACK_RECIPE_NAME, FieldValue, FlexibleText, STRUCTURING_FAILED_MARKER,
    };

    fn sample_recipe_json() -> Value {
        json!({
            "recipe_name": "Chicken Fried Rice",
            "description": "Quick weeknight fried rice",
            "cuisine_type": "Chinese",
            "prep_time": "10",
            "cook_time": 15,
            "servings": "4",
            "difficulty": "Easy",
            "ingredients": [
                {"item": "chicken", "quantity": "300", "unit": "g"},
                {"item": "rice", "quantity": 2, "unit": "cups"}
            ],
            "instructions": ["Cook the rice", "Fry the chicken", "Combine"],
            "nutritional_info": {"calories": "450", "protein": "30g", "carbs": "50g", "fat": "12g"},
            "tips": ["Use day-old rice"]
        })
    }

    #[test]
    fn test_parse_plain_json() {
        let raw = sample_recipe_json().to_string();
        let recipe = parse_recipe_response(&raw).unwrap();

        assert_eq!(recipe.recipe_name, "Chicken Fried Rice");
        assert_eq!(recipe.cook_time, Some(FlexibleText::Integer(15).into()));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].quantity, Some(FlexibleText::Integer(2).into()));
        assert_eq!(recipe.instructions.len(), 3);
        assert!(!recipe.is_fallback());
        assert_eq!(serde_json::to_value(&recipe).unwrap(), sample_recipe_json());
    }

    #[test]
    fn test_parse_fenced_json_matches_unfenced() {
        let body = serde_json::to_string_pretty(&sample_recipe_json()).unwrap();
        let fenced = format!("```json\n{body}\n```");
        let bare_fence = format!("  ```\n{body}\n```  \n");

        let expected = parse_recipe_response(&body).unwrap();
        assert_eq!(parse_recipe_response(&fenced).unwrap(), expected);
        assert_eq!(parse_recipe_response(&bare_fence).unwrap(), expected);
    }

    #[test]
    fn test_strip_code_fences_keeps_embedded_backticks() {
        let raw = "```json\n{\"note\": \"use ``` sparingly\"}\n```";
        assert_eq!(strip_code_fences(raw), "{\"note\": \"use ``` sparingly\"}");
    }

    #[test]
    fn test_strip_code_fences_leaves_unfenced_text() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let mut value = sample_recipe_json();
        value["chef_notes"] = json!({"origin": "Yangzhou"});
        value["ingredients"][0]["preparation"] = json!("diced");
        value["nutritional_info"]["fiber"] = json!("3g");

        let recipe = parse_recipe_response(&value.to_string()).unwrap();

        assert_eq!(recipe.extra.get("chef_notes"), Some(&json!({"origin": "Yangzhou"})));
        assert_eq!(serde_json::to_value(&recipe).unwrap(), value);
    }

    #[test]
    fn test_extra_fields_keep_their_order() {
        let raw = r#"{"recipe_name": "X", "zeta": 1, "ingredients": [], "alpha": 2, "instructions": ["a"], "mid": 3}"#;
        let recipe = parse_recipe_response(raw).unwrap();

        let keys: Vec<&str> = recipe.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let serialized = serde_json::to_string(&recipe).unwrap();
        assert!(serialized.ends_with(r#""zeta":1,"alpha":2,"mid":3}"#), "{serialized}");
    }

    #[test]
    fn test_optional_fields_of_unexpected_type_pass_through() {
        let value = json!({
            "recipe_name": "X",
            "ingredients": [{"item": "egg", "quantity": ["two"]}],
            "instructions": ["a"],
            "tips": "Serve hot",
            "difficulty": 2,
            "nutritional_info": "unknown",
            "error": {"code": 7}
        });

        let recipe = parse_recipe_response(&value.to_string()).unwrap();

        assert_eq!(recipe.tips, Some(FieldValue::Raw(json!("Serve hot"))));
        assert_eq!(recipe.difficulty, Some(FieldValue::Raw(json!(2))));
        assert_eq!(recipe.ingredients[0].quantity, Some(FieldValue::Raw(json!(["two"]))));
        assert!(!recipe.is_fallback());
        assert_eq!(serde_json::to_value(&recipe).unwrap(), value);
    }

    #[test]
    fn test_explicit_null_is_kept() {
        let raw = r#"{"recipe_name": "X", "description": null, "ingredients": [{"item": "egg", "unit": null}], "instructions": ["a"]}"#;
        let recipe = parse_recipe_response(raw).unwrap();

        assert_eq!(recipe.description, Some(FieldValue::Raw(Value::Null)));
        let serialized = serde_json::to_value(&recipe).unwrap();
        assert_eq!(serialized["description"], Value::Null);
        assert!(serialized.as_object().unwrap().contains_key("description"));
        assert!(serialized["ingredients"][0].as_object().unwrap().contains_key("unit"));
        assert!(!serialized.as_object().unwrap().contains_key("tips"));
    }

    #[test]
    fn test_round_trip() {
        let recipe = parse_recipe_response(&sample_recipe_json().to_string()).unwrap();
        let serialized = serde_json::to_string(&recipe).unwrap();
        assert_eq!(parse_recipe_response(&serialized).unwrap(), recipe);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let raw = "Here is a lovely recipe: boil the eggs, then eat them. ".repeat(6);
        let recipe = parse_recipe_response(&raw).unwrap();

        assert_eq!(recipe.recipe_name, FALLBACK_RECIPE_NAME);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, vec![raw.clone()]);
        assert_eq!(
            recipe.description.as_ref().and_then(FieldValue::as_str),
            Some(raw.chars().take(200).collect::<String>().as_str())
        );
        assert_eq!(
            recipe.error.as_ref().and_then(FieldValue::as_str),
            Some(STRUCTURING_FAILED_MARKER)
        );
    }

    #[test]
    fn test_truncated_json_falls_back() {
        let raw = "```json\n{\"recipe_name\": \"Soup\", \"ingredients\": [";
        let recipe = parse_recipe_response(raw).unwrap();
        assert_eq!(recipe.recipe_name, FALLBACK_RECIPE_NAME);
        assert_eq!(recipe.instructions, vec![raw.to_string()]);
    }

    #[test]
    fn test_missing_instructions() {
        let mut value = sample_recipe_json();
        value.as_object_mut().unwrap().remove("instructions");

        let err = parse_recipe_response(&value.to_string()).unwrap_err();
        assert_eq!(err, CoreError::MissingField("instructions".to_string()));
    }

    #[test]
    fn test_missing_recipe_name() {
        let err = parse_recipe_response(r#"{"ingredients": [], "instructions": ["x"]}"#)
            .unwrap_err();
        assert_eq!(err, CoreError::MissingField("recipe_name".to_string()));
    }

    #[test]
    fn test_empty_instructions_rejected() {
        let mut value = sample_recipe_json();
        value["instructions"] = json!([]);

        let err = parse_recipe_response(&value.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPayload(_)));
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let mut value = sample_recipe_json();
        value["instructions"] = json!("just cook it");

        let err = parse_recipe_response(&value.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPayload(_)));
    }

    #[test]
    fn test_non_object_json_rejected() {
        let err = parse_recipe_response("[1, 2, 3]").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidPayload("expected a JSON object, got an array".to_string())
        );
    }

    #[test]
    fn test_parse_suggestions() {
        let raw = r#"```json
{"recipes": [
  {"recipe_name": "Shakshuka", "difficulty": "Easy", "estimated_time": "25", "spice": "mild"},
  {"recipe_name": "Omelette", "estimated_time": 10}
]}
```"#;
        let recipes = parse_suggestions_response(raw).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(
            recipes[0].recipe_name.as_ref().and_then(FieldValue::as_str),
            Some("Shakshuka")
        );
        assert_eq!(recipes[0].extra.get("spice"), Some(&json!("mild")));
        assert_eq!(recipes[1].estimated_time, Some(FlexibleText::Integer(10).into()));
        assert_eq!(recipes[1].description, None);
    }

    #[test]
    fn test_suggestions_lenient_fields() {
        let raw = r#"{"recipes": [{"recipe_name": "Omelette", "difficulty": 1, "estimated_time": null}]}"#;
        let recipes = parse_suggestions_response(raw).unwrap();

        assert_eq!(recipes[0].difficulty, Some(FieldValue::Raw(json!(1))));
        assert_eq!(
            serde_json::to_value(&recipes[0]).unwrap(),
            json!({"recipe_name": "Omelette", "difficulty": 1, "estimated_time": null})
        );
    }

    #[test]
    fn test_suggestions_invalid_json_is_error() {
        let err = parse_suggestions_response("Try an omelette!").unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }

    #[test]
    fn test_suggestions_missing_container() {
        let err = parse_suggestions_response(r#"{"ideas": []}"#).unwrap_err();
        assert_eq!(err, CoreError::MissingField("recipes".to_string()));
    }

    #[test]
    fn test_suggestions_wrong_shape() {
        let err = parse_suggestions_response(r#"{"recipes": "omelette"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPayload(_)));
    }
}
