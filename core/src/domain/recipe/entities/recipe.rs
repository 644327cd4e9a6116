use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const FALLBACK_RECIPE_NAME: &str = "Generated Recipe";
pub const FALLBACK_DESCRIPTION_CHARS: usize = 200;
pub const STRUCTURING_FAILED_MARKER: &str = "Failed to parse structured recipe";

/// A scalar the model may send either as text (`"30 minutes"`) or as a bare
/// number (`30`). The original JSON type is kept on the way back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleText {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for FlexibleText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlexibleText::Text(text) => f.write_str(text),
            FlexibleText::Integer(value) => write!(f, "{value}"),
            FlexibleText::Float(value) => write!(f, "{value}"),
        }
    }
}

/// An optional field as the model sent it.
///
/// Values of the expected type are decoded into `T`. Anything else, `null`
/// included, is kept verbatim so it can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue<T> {
    Typed(T),
    Raw(Value),
}

impl<T> FieldValue<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            FieldValue::Typed(value) => Some(value),
            FieldValue::Raw(_) => None,
        }
    }
}

impl FieldValue<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.typed().map(String::as_str)
    }
}

impl<T> From<T> for FieldValue<T> {
    fn from(value: T) -> Self {
        FieldValue::Typed(value)
    }
}

/// Used with `#[serde(default)]`: an absent key stays `None`, a present one
/// (even `null`) becomes `Some`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<FieldValue<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_name: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<FieldValue<FlexibleText>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<FieldValue<FlexibleText>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub servings: Option<FieldValue<FlexibleText>>,
    /// Usually one of Easy, Medium or Hard. Not enforced.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<FieldValue<String>>,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<FieldValue<NutritionalInfo>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tips: Option<FieldValue<Vec<String>>>,
    /// Only set on the fallback recipe built when structuring failed.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldValue<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub item: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<FieldValue<FlexibleText>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub unit: Option<FieldValue<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub calories: Option<FieldValue<FlexibleText>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub protein: Option<FieldValue<FlexibleText>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub carbs: Option<FieldValue<FlexibleText>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fat: Option<FieldValue<FlexibleText>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Degraded recipe used when the model reply could not be structured.
    /// The whole reply becomes the single instruction step.
    pub fn fallback(raw_response: &str) -> Self {
        Self {
            recipe_name: FALLBACK_RECIPE_NAME.to_string(),
            description: Some(FieldValue::Typed(
                raw_response
                    .chars()
                    .take(FALLBACK_DESCRIPTION_CHARS)
                    .collect(),
            )),
            cuisine_type: None,
            prep_time: None,
            cook_time: None,
            servings: None,
            difficulty: None,
            ingredients: Vec::new(),
            instructions: vec![raw_response.to_string()],
            nutritional_info: None,
            tips: None,
            error: Some(FieldValue::Typed(STRUCTURING_FAILED_MARKER.to_string())),
            extra: Map::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.as_ref().and_then(FieldValue::as_str) == Some(STRUCTURING_FAILED_MARKER)
    }
}
