use crate::domain::common::entities::app_errors::CoreError;

/// Outcome of one generation round trip, handed from the core to the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult<T> {
    Success(T),
    Failure { error: String, message: String },
}

impl<T> GenerationResult<T> {
    /// Collapses a core outcome, attaching a fixed human readable `message`
    /// to any failure.
    pub fn from_outcome(outcome: Result<T, CoreError>, message: &str) -> Self {
        match outcome {
            Ok(payload) => GenerationResult::Success(payload),
            Err(e) => GenerationResult::Failure {
                error: e.to_string(),
                message: message.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_outcome_failure_stringifies_error() {
        let result: GenerationResult<()> = GenerationResult::from_outcome(
            Err(CoreError::MissingField("instructions".to_string())),
            "Failed to generate recipe",
        );

        assert_eq!(
            result,
            GenerationResult::Failure {
                error: "Missing required field: instructions".to_string(),
                message: "Failed to generate recipe".to_string(),
            }
        );
        assert!(!result.is_success());
    }
}
