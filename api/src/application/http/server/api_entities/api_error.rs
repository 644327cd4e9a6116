use axum::{
    Json,
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use pantrychef_core::domain::recipe::GenerationResult;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::args::RecipeArgs;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Validation error")]
    Validation(Vec<ValidationDetail>),

    #[error("{message}: {error}")]
    GenerationFailed { error: String, message: String },

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

/// One failed rule on one request field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationDetail {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Envelope shared by every failed response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationDetail>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoData | ApiError::InvalidJson(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::GenerationFailed { .. } | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn into_body(self) -> ErrorResponse {
        let (error, message, details) = match self {
            ApiError::NoData => ("No data provided".to_string(), None, None),
            ApiError::InvalidJson(message) => ("Invalid JSON".to_string(), Some(message), None),
            ApiError::Validation(details) => ("Validation error".to_string(), None, Some(details)),
            ApiError::GenerationFailed { error, message } => (error, Some(message), None),
            ApiError::NotFound => (
                "Endpoint not found".to_string(),
                Some("The requested endpoint does not exist".to_string()),
                None,
            ),
            ApiError::MethodNotAllowed => (
                "Method not allowed".to_string(),
                Some("The HTTP method is not allowed for this endpoint".to_string()),
                None,
            ),
            ApiError::InternalServerError(message) => {
                ("Internal server error".to_string(), Some(message), None)
            }
        };

        ErrorResponse {
            success: false,
            error,
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<ValidationDetail> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |e| ValidationDetail {
                    field: field.clone(),
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        details.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(details)
    }
}

/// Maps the core outcome onto the HTTP error taxonomy.
pub fn into_api_result<T>(result: GenerationResult<T>) -> Result<T, ApiError> {
    match result {
        GenerationResult::Success(payload) => Ok(payload),
        GenerationResult::Failure { error, message } => {
            Err(ApiError::GenerationFailed { error, message })
        }
    }
}

/// Request payload rules. Derived `validator` rules and the ones depending on
/// runtime limits are reported together.
pub trait ValidateRequest {
    fn validate_request(&self, limits: &RecipeArgs) -> Result<(), ValidationErrors>;
}

/// JSON body extractor that runs [`ValidateRequest`] before the handler sees
/// the payload.
///
/// The `Content-Type` header is not checked. An empty or falsy body (`null`,
/// `{}`, `[]`, `""`, `0`, `false`) is rejected as [`ApiError::NoData`], any
/// other non-object body as a validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + ValidateRequest,
    RecipeArgs: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let limits = RecipeArgs::from_ref(state);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidJson(e.body_text()))?;

        let value = parse_body(&body)?;

        let payload: T =
            serde_json::from_value(value).map_err(|e| body_type_error(e.to_string()))?;

        payload.validate_request(&limits)?;

        Ok(ValidateJson(payload))
    }
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::NoData);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidJson(e.to_string()))?;

    if is_falsy(&value) {
        return Err(ApiError::NoData);
    }

    match value {
        Value::Object(_) => Ok(value),
        Value::Array(_) => Err(body_type_error("expected a JSON object, got an array")),
        Value::String(_) => Err(body_type_error("expected a JSON object, got a string")),
        _ => Err(body_type_error("expected a JSON object, got a scalar")),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn body_type_error(message: impl Into<String>) -> ApiError {
    ApiError::Validation(vec![ValidationDetail {
        field: "body".to_string(),
        code: "type".to_string(),
        message: message.into(),
    }])
}
