//! # Domain Types
//!
//! Core domain types for variant selection and cart commit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Variant     │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  color_code     │   │  color (full)   │       │
//! │  │  name           │   │  size           │   │  qty, size      │       │
//! │  │  price (Money)  │   │  stock (u32)    │   │  price snapshot │       │
//! │  │  colors, sizes  │   │  unique per     │   │  stock snapshot │       │
//! │  │  variants       │   │  (color, size)  │   │  added_at       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` freezes the product's name, image, price and the variant's
//! stock at commit time. The cart stays consistent even if the catalog
//! changes after the item was added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Color
// =============================================================================

/// An advertised product color.
///
/// `code` is the raw 6-hex-digit value without `#` ("FFDDDD"); the
/// presentation layer prefixes it for CSS. `label` is the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Color {
    pub code: String,
    pub label: String,
}

// =============================================================================
// Variant
// =============================================================================

/// A sellable (color, size) combination with its own stock count.
///
/// Unique per (color_code, size) pair within a product; immutable for the
/// lifetime of a selection session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    /// Color code of this variant ("000000").
    pub color_code: String,
    /// Size label of this variant ("M").
    pub size: String,
    /// Units in stock. Zero means the size chip is disabled in the UI.
    pub stock: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A product as listed in the catalog, with its full variant-stock table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: String,

    /// Display name shown on the product page and in the cart.
    pub name: String,

    /// Path to the base product image.
    pub main_image: String,

    /// Price in minor units.
    pub price: Money,

    /// Advertised colors, in display order. Never empty for a sellable
    /// product; the first entry is the default selection.
    pub colors: Vec<Color>,

    /// Advertised size labels, in display order.
    pub sizes: Vec<String>,

    /// The variant-stock table. Must be complete: one row for every
    /// advertised color × size combination.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Looks up stock for an exact (color code, size) pair.
    ///
    /// ## Totality
    /// The lookup is total over the advertised combinations: a missing row
    /// fails with [`CoreError::VariantNotFound`] instead of silently
    /// reading as zero. Missing rows are catalog corruption, and arithmetic
    /// on an unchecked lookup is exactly the bug this signature prevents.
    pub fn stock(&self, color_code: &str, size: &str) -> CoreResult<u32> {
        self.variants
            .iter()
            .find(|v| v.color_code == color_code && v.size == size)
            .map(|v| v.stock)
            .ok_or_else(|| CoreError::VariantNotFound {
                color_code: color_code.to_string(),
                size: size.to_string(),
            })
    }

    /// Resolves the full color object for a code.
    pub fn color(&self, code: &str) -> CoreResult<&Color> {
        self.colors
            .iter()
            .find(|c| c.code == code)
            .ok_or_else(|| CoreError::ColorNotFound(code.to_string()))
    }

    /// Checks whether the product advertises the given color code.
    pub fn has_color(&self, code: &str) -> bool {
        self.colors.iter().any(|c| c.code == code)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A resolved, cart-ready record produced by a successful commit.
///
/// ## Lifecycle
/// Created only by [`crate::VariantSelector::commit`]; never mutated after
/// creation. Removal and quantity updates belong to the cart page, not to
/// this core.
///
/// ## Wire Shape
/// Serializes to the JSON object the storefront frontend reads back from
/// the durable sink: `color`, `id`, `image`, `name`, `price`, `qty`,
/// `size`, `stock`, `added_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// The chosen color, resolved to the full object (not just the code).
    pub color: Color,

    /// Product catalog identifier.
    pub id: String,

    /// Product image path at time of adding (frozen).
    pub image: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub price: Money,

    /// Quantity chosen, within `[1, stock]`.
    pub qty: u32,

    /// The chosen size label.
    pub size: String,

    /// Stock of the chosen variant at time of adding (frozen).
    pub stock: u32,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product {
            id: "201807201824".to_string(),
            name: "Classic Tee".to_string(),
            main_image: "/images/201807201824.jpg".to_string(),
            price: Money::from_minor(29900),
            colors: vec![
                Color {
                    code: "FFFFFF".to_string(),
                    label: "White".to_string(),
                },
                Color {
                    code: "DDF0FF".to_string(),
                    label: "Light Blue".to_string(),
                },
            ],
            sizes: vec!["S".to_string(), "M".to_string()],
            variants: vec![
                Variant {
                    color_code: "FFFFFF".to_string(),
                    size: "S".to_string(),
                    stock: 5,
                },
                Variant {
                    color_code: "FFFFFF".to_string(),
                    size: "M".to_string(),
                    stock: 0,
                },
                Variant {
                    color_code: "DDF0FF".to_string(),
                    size: "S".to_string(),
                    stock: 2,
                },
                Variant {
                    color_code: "DDF0FF".to_string(),
                    size: "M".to_string(),
                    stock: 7,
                },
            ],
        }
    }

    #[test]
    fn test_stock_lookup() {
        let product = test_product();
        assert_eq!(product.stock("FFFFFF", "S").unwrap(), 5);
        assert_eq!(product.stock("FFFFFF", "M").unwrap(), 0);
        assert_eq!(product.stock("DDF0FF", "M").unwrap(), 7);
    }

    #[test]
    fn test_stock_lookup_missing_variant_is_an_error() {
        let product = test_product();
        let err = product.stock("FFFFFF", "XL").unwrap_err();
        assert!(matches!(err, CoreError::VariantNotFound { .. }));
        assert_eq!(err.to_string(), "No variant for color FFFFFF size XL");
    }

    #[test]
    fn test_color_resolution() {
        let product = test_product();
        let color = product.color("DDF0FF").unwrap();
        assert_eq!(color.label, "Light Blue");

        assert!(matches!(
            product.color("ABCDEF").unwrap_err(),
            CoreError::ColorNotFound(_)
        ));
        assert!(product.has_color("FFFFFF"));
        assert!(!product.has_color("ABCDEF"));
    }

    #[test]
    fn test_line_item_total_and_json_shape() {
        let item = LineItem {
            color: Color {
                code: "FFFFFF".to_string(),
                label: "White".to_string(),
            },
            id: "201807201824".to_string(),
            image: "/images/201807201824.jpg".to_string(),
            name: "Classic Tee".to_string(),
            price: Money::from_minor(29900),
            qty: 3,
            size: "S".to_string(),
            stock: 5,
            added_at: Utc::now(),
        };
        assert_eq!(item.line_total().minor(), 89700);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], 29900);
        assert_eq!(json["qty"], 3);
        assert_eq!(json["color"]["code"], "FFFFFF");
    }
}
