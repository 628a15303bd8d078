use axum::http::StatusCode;
use thiserror::Error;

/// Reasons an inbound payload is refused before it reaches the session.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("servings must be a positive number, got {0}")]
    Servings(f64),
    #[error("nutrition values must be non-negative ({0})")]
    Nutrition(&'static str),
    #[error("date_start {start} is after date_end {end}")]
    DateRange { start: String, end: String },
    #[error("weight_kg must not be negative")]
    Weight,
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("recipe title must not be empty")]
    EmptyTitle,
    #[error("recipe {0} already exists")]
    DuplicateRecipe(String),
}

impl ValidationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ValidationError::DuplicateRecipe(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ValidationError> for (StatusCode, String) {
    fn from(e: ValidationError) -> Self {
        (e.status(), e.to_string())
    }
}

pub fn not_onboarded() -> (StatusCode, String) {
    (StatusCode::CONFLICT, "onboarding not completed".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_recipe_maps_to_conflict() {
        let (status, msg) = ValidationError::DuplicateRecipe("r1".into()).into();
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(msg.contains("r1"));
    }

    #[test]
    fn other_errors_map_to_bad_request() {
        let (status, _) = ValidationError::Servings(0.0).into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
