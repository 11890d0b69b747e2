//! # Variant Selector
//!
//! The variant-selection state machine: one selector per product page,
//! driving color, size and quantity under real inventory constraints.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Selection State Transitions                           │
//! │                                                                         │
//! │  Event             Precondition                  Effect                 │
//! │  ───────────       ─────────────────────────     ────────────────────── │
//! │  select_color(c)   c ∈ product.colors            color=c, size=None,    │
//! │                                                  qty=1                  │
//! │  select_size(s)    stock(color, s) > 0           size=s; qty>stock →    │
//! │                    (stock 0 → no-op)             qty=1                  │
//! │  increment()       size chosen, qty < stock      qty += 1               │
//! │                    (otherwise no-op)                                    │
//! │  decrement()       size chosen, qty > 1          qty -= 1               │
//! │                    (otherwise no-op)                                    │
//! │  commit()          size chosen                   → LineItem             │
//! │                                                                         │
//! │  INVARIANT: size chosen ⇒ 1 ≤ qty ≤ stock(color, size)                  │
//! │  INVARIANT: changing color resets size and quantity                     │
//! │             (stock differs per color)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no terminal state: the selector is reusable across multiple
//! commits within the same page session; only the cart changes.

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::types::{LineItem, Product};
use crate::validation::validate_catalog;

// =============================================================================
// Variant Selector
// =============================================================================

/// Per-session selection state for one product.
///
/// Holds the product it was built from, so every stock lookup resolves
/// against the same immutable variant table for the whole session.
#[derive(Debug, Clone)]
pub struct VariantSelector {
    product: Product,
    selected_color_code: String,
    selected_size: Option<String>,
    quantity: u32,
}

impl VariantSelector {
    /// Creates a selector in its initial state: first advertised color,
    /// no size chosen, quantity 1.
    ///
    /// ## Errors
    /// Fails if the catalog entry is invalid - no colors, duplicate variant
    /// rows, or a variant table that doesn't cover every advertised
    /// color × size pair. Validating here makes every later `stock` lookup
    /// resolvable, so transition-time `VariantNotFound` only occurs for
    /// sizes outside the advertised list.
    pub fn new(product: Product) -> CoreResult<Self> {
        validate_catalog(&product)?;

        // validate_catalog guarantees at least one color
        let first_color = product.colors[0].code.clone();

        Ok(VariantSelector {
            product,
            selected_color_code: first_color,
            selected_size: None,
            quantity: 1,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The product this selector was built from.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The currently selected color code. Always a member of
    /// `product.colors`; never empty.
    pub fn selected_color_code(&self) -> &str {
        &self.selected_color_code
    }

    /// The currently selected size, or `None` if no size is chosen yet.
    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    /// The chosen quantity. Always at least 1; bounded above by the stock
    /// of the selected variant once a size is chosen.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Selects a color by code.
    ///
    /// Always resets the size to none and the quantity to 1, even when the
    /// code is unchanged: stock differs per color, so a previously valid
    /// (size, quantity) pair means nothing under the new color. Selecting
    /// the same color twice is therefore idempotent.
    ///
    /// ## Errors
    /// [`CoreError::ColorNotFound`] if the product does not advertise the
    /// code; state is unchanged.
    pub fn select_color(&mut self, code: &str) -> CoreResult<()> {
        if !self.product.has_color(code) {
            return Err(CoreError::ColorNotFound(code.to_string()));
        }

        self.selected_color_code = code.to_string();
        self.selected_size = None;
        self.quantity = 1;
        Ok(())
    }

    /// Selects a size for the current color.
    ///
    /// ## Behavior
    /// - Stock of the (current color, size) variant is 0: **no-op**. The UI
    ///   renders such chips disabled, but the machine guards the
    ///   precondition itself.
    /// - Otherwise the size is set; if the carried-over quantity exceeds
    ///   the new variant's stock it is reset to 1.
    ///
    /// ## Errors
    /// [`CoreError::VariantNotFound`] if the variant table has no row for
    /// the pair - a catalog fault, surfaced rather than read as zero stock.
    pub fn select_size(&mut self, size: &str) -> CoreResult<()> {
        let stock = self.product.stock(&self.selected_color_code, size)?;
        if stock == 0 {
            return Ok(());
        }

        self.selected_size = Some(size.to_string());
        if self.quantity > stock {
            self.quantity = 1;
        }
        Ok(())
    }

    /// Increases the quantity by one, capped at the selected variant's
    /// stock. No-op while no size is chosen or the cap is reached.
    ///
    /// ## Errors
    /// [`CoreError::VariantNotFound`] only on a corrupt variant table;
    /// see [`Self::select_size`].
    pub fn increment(&mut self) -> CoreResult<()> {
        let Some(size) = self.selected_size.as_deref() else {
            return Ok(());
        };

        let stock = self.product.stock(&self.selected_color_code, size)?;
        if self.quantity < stock {
            self.quantity += 1;
        }
        Ok(())
    }

    /// Decreases the quantity by one, floored at 1. No-op while no size is
    /// chosen or the floor is reached.
    pub fn decrement(&mut self) {
        if self.selected_size.is_some() && self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Composes the current selection into a cart-ready [`LineItem`].
    ///
    /// Pure derivation: resolves the full color object, snapshots the
    /// variant's current stock, price, name and image, and stamps the time
    /// of adding. Mutates nothing - persisting the item is the cart
    /// store's job, and the selector stays usable for further commits.
    ///
    /// ## Errors
    /// - [`CoreError::NoSizeSelected`] if no size is chosen; the
    ///   presentation layer maps this to the "choose a size" prompt.
    /// - [`CoreError::VariantNotFound`] / [`CoreError::ColorNotFound`] only
    ///   on a corrupt catalog (prevented by construction-time validation).
    pub fn commit(&self) -> CoreResult<LineItem> {
        let size = self.selected_size.as_deref().ok_or(CoreError::NoSizeSelected)?;

        let color = self.product.color(&self.selected_color_code)?;
        let stock = self.product.stock(&self.selected_color_code, size)?;

        Ok(LineItem {
            color: color.clone(),
            id: self.product.id.clone(),
            image: self.product.main_image.clone(),
            name: self.product.name.clone(),
            price: self.product.price,
            qty: self.quantity,
            size: size.to_string(),
            stock,
            added_at: Utc::now(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
