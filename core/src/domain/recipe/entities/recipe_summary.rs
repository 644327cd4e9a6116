use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::recipe::entities::{FieldValue, FlexibleText, recipe::present};

/// Lightweight recipe idea returned by the suggestions path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<FieldValue<FlexibleText>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
