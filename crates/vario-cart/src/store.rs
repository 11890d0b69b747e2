//! # Cart Store
//!
//! The persistence bridge between a composed [`LineItem`] and the durable
//! sink: read the current sequence, append, persist, acknowledge.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Commit Flow                                  │
//! │                                                                         │
//! │  add_to_cart(selector, store)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  selector.commit() ── NoSizeSelected? ──► Err (size prompt, no change) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.add(item)                                                       │
//! │       ├── serialize current ++ [item]                                  │
//! │       ├── sink.set("cartItems", payload) ── Err? ──► in-memory cart    │
//! │       │                                              UNCHANGED         │
//! │       ▼                                                                 │
//! │  replace in-memory sequence, return the item                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  caller shows "item added"                                             │
//! │                                                                         │
//! │  ORDERING: durable write FIRST, memory second. The acknowledgment      │
//! │  can never race ahead of durability.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use vario_core::{LineItem, VariantSelector};

use crate::error::CartResult;
use crate::sink::DurableSink;

/// The fixed sink key the serialized cart lives under.
///
/// Matches the key the storefront frontend reads on the cart page, so a
/// persisted cart survives a page reload.
pub const CART_ITEMS_KEY: &str = "cartItems";

// =============================================================================
// Cart Store
// =============================================================================

/// The shared cart: an ordered sequence of line items plus the sink it is
/// persisted through.
///
/// ## Contract
/// - `items()` is the current sequence, identical to what the sink holds
/// - `add()` is append-only: no de-duplication or merge-by-variant; every
///   commit adds a new entry, even for an already-present variant
/// - one sink read per hydration, one sink write per append
///
/// ## Writer Model
/// At most one active writer per session; selectors across page
/// navigations share this store by handle. If concurrent writers are ever
/// introduced, the sink's replace semantics make last-write-wins the
/// policy.
#[derive(Debug)]
pub struct CartStore<S: DurableSink> {
    sink: S,
    items: Vec<LineItem>,
}

impl<S: DurableSink> CartStore<S> {
    /// Opens a store over `sink`, hydrating the sequence from the fixed
    /// key. An absent key is an empty cart, not an error.
    pub fn open(sink: S) -> CartResult<Self> {
        let items = match sink.get(CART_ITEMS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        debug!(items = items.len(), "Hydrated cart");
        Ok(CartStore { sink, items })
    }

    /// The current cart sequence, oldest first.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a line item and persists the new sequence.
    ///
    /// ## Ordering
    /// The appended sequence is written to the sink first; the in-memory
    /// sequence is replaced only after the write succeeded. On any error
    /// the observable cart state is exactly what it was before the call,
    /// so the caller's "item added" acknowledgment never outruns
    /// durability.
    pub fn add(&mut self, item: LineItem) -> CartResult<()> {
        let mut next = self.items.clone();
        next.push(item);

        let payload = serde_json::to_string(&next)?;
        self.sink.set(CART_ITEMS_KEY, &payload)?;

        let added = &next[next.len() - 1];
        info!(
            product_id = %added.id,
            size = %added.size,
            qty = added.qty,
            items = next.len(),
            "Added line item to cart"
        );
        self.items = next;
        Ok(())
    }
}

// =============================================================================
// Orchestration
// =============================================================================

/// Commits the selector's current state into the cart.
///
/// The single entry point behind the "add to cart" button: composes the
/// line item (pure) and persists the appended sequence (durable-first).
/// Returns the appended item as the success acknowledgment value; errors
/// carry everything the presentation layer needs to pick a prompt, and
/// leave both the selector and the cart untouched.
pub fn add_to_cart<S: DurableSink>(
    selector: &VariantSelector,
    store: &mut CartStore<S>,
) -> CartResult<LineItem> {
    let item = selector.commit()?;
    store.add(item.clone())?;
    Ok(item)
}

// =============================================================================
// Unit Tests
// =============================================================================
