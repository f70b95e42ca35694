//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// A required field was empty. Carries the field's wire name.
    EmptyField(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyField(field) => write!(f, "Required field is empty: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::EmptyField("firstName");
        assert_eq!(err.to_string(), "Required field is empty: firstName");
    }
}
