use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Model(_) => 1010,
            ServiceError::Storage(_) => 1200,
        }
    }

    /// Text suitable for showing to the dashboard user.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(msg) | ServiceError::NotFound(msg) => msg.clone(),
            ServiceError::Model(models::errors::ModelError::Validation(msg)) => msg.clone(),
            ServiceError::Storage(_) => "Could not save your changes. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ServiceError::Validation("x".into()).code(), 1001);
        assert_eq!(ServiceError::not_found("patient").code(), 1003);
        assert_eq!(ServiceError::Storage("disk".into()).code(), 1200);
    }

    #[test]
    fn model_validation_surfaces_raw_message() {
        let err: ServiceError = ModelError::Validation("fill it in".into()).into();
        assert_eq!(err.user_message(), "fill it in");
        assert_eq!(ServiceError::not_found("patient").user_message(), "patient not found");
    }
}
