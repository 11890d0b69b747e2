//! # vario-core: Pure Business Logic for Vario
//!
//! This crate is the **heart** of Vario. It contains the variant-selection
//! state machine and line-item derivation as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vario Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront Frontend (TypeScript)               │   │
//! │  │    Color swatches ──► Size chips ──► Qty stepper ──► Add button │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vario-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  selector │  │   money   │  │ validation│  │   │
//! │  │   │  Product  │  │  Variant  │  │   Money   │  │  catalog  │  │   │
//! │  │   │  LineItem │  │  Selector │  │ (no float)│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   vario-cart (Persistence Layer)                │   │
//! │  │          Cart Store, durable JSON key-value sink                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Color, Variant, LineItem)
//! - [`selector`] - The variant-selection state machine
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog and input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic over its inputs
//! 2. **No I/O**: Persistence and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vario_core::{Color, Money, Product, Variant, VariantSelector};
//!
//! let product = Product {
//!     id: "201807201824".to_string(),
//!     name: "Classic Tee".to_string(),
//!     main_image: "/images/201807201824.jpg".to_string(),
//!     price: Money::from_minor(29900),
//!     colors: vec![Color { code: "000000".to_string(), label: "Black".to_string() }],
//!     sizes: vec!["S".to_string(), "M".to_string()],
//!     variants: vec![
//!         Variant { color_code: "000000".to_string(), size: "S".to_string(), stock: 0 },
//!         Variant { color_code: "000000".to_string(), size: "M".to_string(), stock: 3 },
//!     ],
//! };
//!
//! let mut selector = VariantSelector::new(product).unwrap();
//! selector.select_size("M").unwrap();
//! selector.increment().unwrap();
//!
//! let item = selector.commit().unwrap();
//! assert_eq!(item.qty, 2);
//! assert_eq!(item.stock, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod selector;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vario_core::Money` instead of
// `use vario_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selector::VariantSelector;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product display name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a size label.
///
/// ## Business Reason
/// Size labels are short chips ("S", "M", "XL", "Free") rendered in a
/// fixed-width circle; anything longer is a catalog data error.
pub const MAX_SIZE_LEN: usize = 8;

/// Length of a color code: 6 hex digits, no `#` prefix ("FFDDDD").
pub const COLOR_CODE_LEN: usize = 6;
