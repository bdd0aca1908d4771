use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyFinanceError {
    /// An input field failed validation. Raised before any computation starts.
    #[error("Invalid input: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PropertyFinanceError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PropertyFinanceError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending input field, if this is a validation failure.
    pub fn field(&self) -> Option<&str> {
        match self {
            PropertyFinanceError::Validation { field, .. } => Some(field),
            PropertyFinanceError::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for PropertyFinanceError {
    fn from(e: serde_json::Error) -> Self {
        PropertyFinanceError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_field() {
        let err = PropertyFinanceError::validation("principal", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input: principal: must be greater than zero"
        );
        assert_eq!(err.field(), Some("principal"));
    }

    #[test]
    fn test_serde_error_converts() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: PropertyFinanceError = bad.unwrap_err().into();
        assert!(matches!(err, PropertyFinanceError::Serialization(_)));
        assert_eq!(err.field(), None);
    }
}
