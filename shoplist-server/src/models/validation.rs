//! Validation error types

use std::fmt;

/// Validation failure for shopping list requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request body was absent, `null`, or not bindable
    MissingBody { request: &'static str },

    /// Field is absent, empty, or whitespace only
    Empty { field: &'static str },

    /// Create targeted a name that is already on the list
    Duplicate { name: String },

    /// Update targeted a name that is not on the list
    UnknownItem { name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBody { request } => write!(f, "{} body is required", request),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Duplicate { name } => write!(f, "item '{}' already exists", name),
            Self::UnknownItem { name } => write!(f, "item '{}' does not exist", name),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-blank value for `field`.
///
/// Absent, empty and whitespace-only values are all rejected. The value is
/// returned untouched; no trimming happens here.
pub fn require_non_blank<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Empty { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Duplicate {
            name: "Milk".into(),
        };
        assert_eq!(err.to_string(), "item 'Milk' already exists");

        let err = ValidationError::Empty { field: "ItemName" };
        assert_eq!(err.to_string(), "ItemName cannot be empty");
    }

    #[test]
    fn blank_values_rejected() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = require_non_blank(value, "ItemName").unwrap_err();
            assert_eq!(err, ValidationError::Empty { field: "ItemName" });
        }
    }

    #[test]
    fn value_kept_as_is() {
        assert_eq!(require_non_blank(Some(" Eggs "), "ItemName").unwrap(), " Eggs ");
    }
}
