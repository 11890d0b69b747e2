//! # vario-cart: Cart Persistence Bridge for Vario
//!
//! This crate bridges the pure selection core to a durable cart. It gives
//! the storefront the same contract the browser's localStorage gives the
//! frontend: a string key-value sink, with the whole cart serialized under
//! one fixed key.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vario Cart Data Flow                            │
//! │                                                                         │
//! │  add_to_cart(selector, store)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vario-cart (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CartStore   │    │  DurableSink  │    │    Errors    │  │   │
//! │  │   │  (store.rs)   │    │   (sink.rs)   │    │  (error.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ read / append │───►│ JsonFileSink  │    │ SinkError    │  │   │
//! │  │   │ write-first   │    │ MemorySink    │    │ CartError    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            { "cartItems": [ ...LineItem... ] } on disk          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`sink`] - The durable key-value abstraction and its implementations
//! - [`store`] - The cart store: read, append, persist, acknowledge
//! - [`error`] - Sink and commit-path error types
//!
//! ## Usage
//!
//! ```rust
//! use vario_cart::{add_to_cart, CartStore, MemorySink};
//! # use vario_core::{Color, Money, Product, Variant, VariantSelector};
//! # let product = Product {
//! #     id: "p1".to_string(),
//! #     name: "Tee".to_string(),
//! #     main_image: "/images/p1.jpg".to_string(),
//! #     price: Money::from_minor(59900),
//! #     colors: vec![Color { code: "000000".to_string(), label: "Black".to_string() }],
//! #     sizes: vec!["M".to_string()],
//! #     variants: vec![Variant {
//! #         color_code: "000000".to_string(),
//! #         size: "M".to_string(),
//! #         stock: 3,
//! #     }],
//! # };
//!
//! let mut selector = VariantSelector::new(product).unwrap();
//! selector.select_size("M").unwrap();
//!
//! let mut store = CartStore::open(MemorySink::new()).unwrap();
//! let item = add_to_cart(&selector, &mut store).unwrap();
//!
//! assert_eq!(store.items().len(), 1);
//! assert_eq!(item.size, "M");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod sink;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CartError, CartResult, SinkError};
pub use sink::{DurableSink, JsonFileSink, MemorySink};
pub use store::{add_to_cart, CartStore, CART_ITEMS_KEY};
