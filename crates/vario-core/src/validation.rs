//! # Validation Module
//!
//! Catalog and input validation for Vario.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Disables zero-stock size chips                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (catalog integrity, field formats)               │
//! │  ├── Runs once at selector construction                                │
//! │  └── Makes every later stock lookup resolvable                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: State machine preconditions (selector.rs)                    │
//! │  └── Guard every transition even if the UI misbehaves                  │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use vario_core::validation::{validate_color_code, validate_size};
//!
//! validate_color_code("FFDDDD").unwrap();
//! validate_size("M").unwrap();
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::{COLOR_CODE_LEN, MAX_PRODUCT_NAME_LEN, MAX_SIZE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a color code.
///
/// ## Rules
/// - Exactly 6 characters
/// - Hex digits only (the `#` prefix belongs to the presentation layer)
///
/// ## Example
/// ```rust
/// use vario_core::validation::validate_color_code;
///
/// assert!(validate_color_code("FFDDDD").is_ok());
/// assert!(validate_color_code("#FFDDDD").is_err());
/// assert!(validate_color_code("red").is_err());
/// ```
pub fn validate_color_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "color code".to_string(),
        });
    }

    if code.len() != COLOR_CODE_LEN || !code.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidFormat {
            field: "color code".to_string(),
            reason: "must be exactly 6 hex digits without a # prefix".to_string(),
        });
    }

    Ok(())
}

/// Validates a size label.
///
/// ## Rules
/// - Must not be empty
/// - At most 8 characters ("S", "M", "XL", "Free")
pub fn validate_size(size: &str) -> ValidationResult<()> {
    let size = size.trim();

    if size.is_empty() {
        return Err(ValidationError::Required {
            field: "size".to_string(),
        });
    }

    if size.len() > MAX_SIZE_LEN {
        return Err(ValidationError::TooLong {
            field: "size".to_string(),
            max: MAX_SIZE_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validator
// =============================================================================

/// Validates a product's catalog entry for selection use.
///
/// ## Rules
/// - Product name and every color code / size label pass field validation
/// - At least one advertised color (the default selection)
/// - No duplicate (color, size) variant rows
/// - The variant table is complete: a row exists for every advertised
///   color × size combination
///
/// ## Why Completeness Matters
/// The selector looks stock up by exact (color, size) match on every
/// transition. An advertised pair without a row would make those lookups
/// unresolvable mid-session, so the hole is rejected up front as
/// [`CoreError::VariantNotFound`].
pub fn validate_catalog(product: &Product) -> CoreResult<()> {
    validate_product_name(&product.name)?;

    if product.colors.is_empty() {
        return Err(ValidationError::Required {
            field: "colors".to_string(),
        }
        .into());
    }

    for color in &product.colors {
        validate_color_code(&color.code)?;
    }
    for size in &product.sizes {
        validate_size(size)?;
    }

    // Duplicate rows would make the (color, size) lookup ambiguous
    for (i, variant) in product.variants.iter().enumerate() {
        let dup = product.variants[..i]
            .iter()
            .any(|v| v.color_code == variant.color_code && v.size == variant.size);
        if dup {
            return Err(ValidationError::Duplicate {
                field: "variant".to_string(),
                value: format!("{}/{}", variant.color_code, variant.size),
            }
            .into());
        }
    }

    // Completeness over the advertised color × size grid
    for color in &product.colors {
        for size in &product.sizes {
            product.stock(&color.code, size)?;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Color, Variant};

    #[test]
    fn test_validate_color_code() {
        assert!(validate_color_code("FFDDDD").is_ok());
        assert!(validate_color_code("000000").is_ok());
        assert!(validate_color_code("ddf0ff").is_ok());

        assert!(validate_color_code("").is_err());
        assert!(validate_color_code("#FFDDDD").is_err());
        assert!(validate_color_code("FFF").is_err());
        assert!(validate_color_code("GGGGGG").is_err());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size("S").is_ok());
        assert!(validate_size("XL").is_ok());
        assert!(validate_size("Free").is_ok());

        assert!(validate_size("").is_err());
        assert!(validate_size("   ").is_err());
        assert!(validate_size("Extra-Large").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Classic Tee").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    fn product_with_variants(variants: Vec<Variant>) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Classic Tee".to_string(),
            main_image: "/images/p1.jpg".to_string(),
            price: Money::from_minor(29900),
            colors: vec![Color {
                code: "000000".to_string(),
                label: "Black".to_string(),
            }],
            sizes: vec!["S".to_string(), "M".to_string()],
            variants,
        }
    }

    #[test]
    fn test_validate_catalog_accepts_complete_table() {
        let product = product_with_variants(vec![
            Variant {
                color_code: "000000".to_string(),
                size: "S".to_string(),
                stock: 1,
            },
            Variant {
                color_code: "000000".to_string(),
                size: "M".to_string(),
                stock: 0,
            },
        ]);
        assert!(validate_catalog(&product).is_ok());
    }

    #[test]
    fn test_validate_catalog_rejects_missing_variant_row() {
        let product = product_with_variants(vec![Variant {
            color_code: "000000".to_string(),
            size: "S".to_string(),
            stock: 1,
        }]);
        let err = validate_catalog(&product).unwrap_err();
        assert!(matches!(err, CoreError::VariantNotFound { .. }));
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_variant_rows() {
        let product = product_with_variants(vec![
            Variant {
                color_code: "000000".to_string(),
                size: "S".to_string(),
                stock: 1,
            },
            Variant {
                color_code: "000000".to_string(),
                size: "S".to_string(),
                stock: 4,
            },
            Variant {
                color_code: "000000".to_string(),
                size: "M".to_string(),
                stock: 2,
            },
        ]);
        let err = validate_catalog(&product).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn test_validate_catalog_rejects_no_colors() {
        let mut product = product_with_variants(vec![]);
        product.colors.clear();
        let err = validate_catalog(&product).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));
    }
}
