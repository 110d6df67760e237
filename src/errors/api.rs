use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Standardized error response for request validation failures
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Validation error types raised by handlers
///
/// Constraint violations on declared parameters are rejected by the framework
/// before a handler runs; this type covers the checks handlers perform
/// themselves, such as the closed query shape of the filter endpoint.
#[derive(ApiResponse, Debug)]
pub enum ValidationError {
    /// Request used query parameters outside the declared set
    #[oai(status = 400)]
    UnexpectedParameters(Json<ValidationErrorResponse>),
}

impl ValidationError {
    /// Create an UnexpectedParameters error naming every offending key
    pub fn unexpected_parameters(keys: &[String]) -> Self {
        ValidationError::UnexpectedParameters(Json(ValidationErrorResponse {
            error: "unexpected_parameters".to_string(),
            message: format!("Unexpected query parameters: {}", keys.join(", ")),
            status_code: 400,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ValidationError::UnexpectedParameters(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
