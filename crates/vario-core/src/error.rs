//! # Error Types
//!
//! Domain-specific error types for vario-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vario-core errors (this file)                                         │
//! │  ├── CoreError        - Selection / stock-lookup failures              │
//! │  └── ValidationError  - Catalog and input validation failures          │
//! │                                                                         │
//! │  vario-cart errors (separate crate)                                    │
//! │  ├── SinkError        - Durable key-value sink failures                │
//! │  └── CartError        - Commit-path failures (wraps both)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → Frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (color code, size, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core selection and stock-lookup errors.
///
/// These errors represent business rule violations or catalog data faults.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The variant table has no row for an advertised (color, size) pair.
    ///
    /// ## When This Occurs
    /// - Catalog data is incomplete (variant table does not cover every
    ///   advertised color × size combination)
    ///
    /// ## Severity
    /// This is a data-integrity fault, not a user error. It must never be
    /// silently defaulted to zero stock: callers log it and treat the
    /// catalog entry as broken.
    #[error("No variant for color {color_code} size {size}")]
    VariantNotFound { color_code: String, size: String },

    /// A color code outside the product's advertised color set.
    ///
    /// ## When This Occurs
    /// - The presentation layer passes a swatch code the product does not
    ///   advertise (stale UI state, tampered request)
    #[error("Color not found: {0}")]
    ColorNotFound(String),

    /// Commit was attempted before a size was chosen.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (no size chosen)
    ///      │
    ///      ▼
    /// NoSizeSelected
    ///      │
    ///      ▼
    /// UI shows: "Please choose a size"
    /// ```
    /// Fully recoverable; the selector state is left untouched.
    #[error("No size selected")]
    NoSizeSelected,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog and input validation errors.
///
/// These errors occur when catalog data doesn't meet requirements.
/// Used for early validation before the state machine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., color code that isn't 6 hex digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two variant rows for the same color × size).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::VariantNotFound {
            color_code: "FFDDDD".to_string(),
            size: "M".to_string(),
        };
        assert_eq!(err.to_string(), "No variant for color FFDDDD size M");

        let err = CoreError::NoSizeSelected;
        assert_eq!(err.to_string(), "No size selected");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "colors".to_string(),
        };
        assert_eq!(err.to_string(), "colors is required");

        let err = ValidationError::TooLong {
            field: "size".to_string(),
            max: 8,
        };
        assert_eq!(err.to_string(), "size must be at most 8 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "colors".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
