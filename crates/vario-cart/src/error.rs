//! # Cart Persistence Error Types
//!
//! Error types for the durable sink and the commit path.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / quota check (sink.rs)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SinkError (this module) ← Adds context and categorization             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError (this module) ← What the commit path returns                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend maps variants to user-facing prompts                         │
//! │       ├── Core(NoSizeSelected)  → "Please choose a size"               │
//! │       ├── Persistence(_)        → retryable "could not save" notice    │
//! │       └── Ok                    → "item added" confirmation            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Sink Error
// =============================================================================

/// Durable key-value sink failures.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Underlying file system operation failed.
    ///
    /// ## When This Occurs
    /// - Sink file can't be created or renamed
    /// - Permissions issue, disk full
    #[error("Sink I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The write would exceed the sink's byte capacity.
    ///
    /// ## When This Occurs
    /// - A quota-bounded sink (the localStorage analogue) rejects a payload
    ///   larger than its configured limit
    ///
    /// Recoverable by the user removing items; the sink content is
    /// unchanged.
    #[error("Sink quota exceeded: {attempted} bytes over a {limit} byte limit")]
    QuotaExceeded { limit: usize, attempted: usize },

    /// The sink holds data that is not valid JSON.
    ///
    /// ## When This Occurs
    /// - The sink file was truncated or edited by hand
    /// - A caller tries to store a non-JSON value
    #[error("Sink data corrupt: {0}")]
    Corrupt(String),
}

// =============================================================================
// Cart Error
// =============================================================================

/// Commit-path failures.
///
/// The presentation layer matches on these instead of this crate raising
/// any UI side effect: success maps to the "item added" confirmation,
/// `Core(NoSizeSelected)` to the size prompt, `Persistence` to a retry
/// notice. The confirmation must never be shown for an `Err`.
#[derive(Debug, Error)]
pub enum CartError {
    /// The durable write failed; the in-memory cart was left unchanged.
    #[error("Cart persistence failed: {0}")]
    Persistence(#[from] SinkError),

    /// The cart sequence could not be (de)serialized.
    #[error("Cart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A selection-core failure (no size chosen, catalog fault).
    #[error(transparent)]
    Core(#[from] vario_core::CoreError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SinkError::QuotaExceeded {
            limit: 1024,
            attempted: 4096,
        };
        assert_eq!(
            err.to_string(),
            "Sink quota exceeded: 4096 bytes over a 1024 byte limit"
        );
    }

    #[test]
    fn test_core_error_passes_through_transparently() {
        let err: CartError = vario_core::CoreError::NoSizeSelected.into();
        assert_eq!(err.to_string(), "No size selected");
        assert!(matches!(err, CartError::Core(_)));
    }

    #[test]
    fn test_sink_error_wraps_into_cart_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: CartError = SinkError::from(io).into();
        assert!(matches!(err, CartError::Persistence(SinkError::Io(_))));
    }
}
