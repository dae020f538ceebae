//! Validation error types
//!
//! Messages are part of the public API and are rendered in Spanish,
//! matching the rest of the HTTP surface.

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are absent or blank
    Missing { fields: Vec<&'static str> },

    /// Field is present but doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded
    Body { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { fields } => {
                write!(f, "Faltan datos: {} son requeridos", fields.join(", "))
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::Body { reason } => write!(f, "Cuerpo de la solicitud inválido: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Treat blank strings the same as absent values.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_every_field() {
        let err = ValidationError::Missing {
            fields: vec!["persona_id", "estatus_id"],
        };
        assert_eq!(
            err.to_string(),
            "Faltan datos: persona_id, estatus_id son requeridos"
        );
    }

    #[test]
    fn blank_is_absent() {
        assert_eq!(present(Some("   ".into())), None);
        assert_eq!(present(None), None);
        assert_eq!(present(Some("p1".into())), Some("p1".into()));
    }
}
