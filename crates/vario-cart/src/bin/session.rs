//! # Session Walkthrough
//!
//! Walks a full selection/commit session against a file-backed cart, for
//! manual smoke testing of the whole stack.
//!
//! ## Usage
//! ```bash
//! # Default sink path (./data/vario-cart.json)
//! cargo run -p vario-cart --bin session
//!
//! # Custom sink path
//! cargo run -p vario-cart --bin session -- --sink /tmp/cart.json
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p vario-cart --bin session
//! ```
//!
//! ## What It Does
//! 1. Builds a sample two-color catalog product
//! 2. Demonstrates the sold-out no-op and the quantity cap
//! 3. Commits one line item per color
//! 4. Prints the persisted cart, which survives re-runs

use std::env;
use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use vario_cart::{add_to_cart, CartError, CartStore, JsonFileSink};
use vario_core::{Color, Money, Product, Variant, VariantSelector};

const DEFAULT_SINK_PATH: &str = "data/vario-cart.json";

/// Sample catalog entry: a tee in two colorways, small sold out in black.
fn sample_product() -> Product {
    Product {
        id: "201807201824".to_string(),
        name: "Classic Crewneck Tee".to_string(),
        main_image: "/images/201807201824.jpg".to_string(),
        price: Money::from_minor(29900),
        colors: vec![
            Color {
                code: "000000".to_string(),
                label: "Black".to_string(),
            },
            Color {
                code: "DDF0FF".to_string(),
                label: "Light Blue".to_string(),
            },
        ],
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        variants: vec![
            Variant {
                color_code: "000000".to_string(),
                size: "S".to_string(),
                stock: 0,
            },
            Variant {
                color_code: "000000".to_string(),
                size: "M".to_string(),
                stock: 3,
            },
            Variant {
                color_code: "000000".to_string(),
                size: "L".to_string(),
                stock: 6,
            },
            Variant {
                color_code: "DDF0FF".to_string(),
                size: "S".to_string(),
                stock: 2,
            },
            Variant {
                color_code: "DDF0FF".to_string(),
                size: "M".to_string(),
                stock: 5,
            },
            Variant {
                color_code: "DDF0FF".to_string(),
                size: "L".to_string(),
                stock: 0,
            },
        ],
    }
}

fn sink_path_from_args() -> String {
    let args: Vec<String> = env::args().collect();
    let mut path = DEFAULT_SINK_PATH.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sink" => {
                if i + 1 < args.len() {
                    path = args[i + 1].clone();
                    i += 1;
                } else {
                    eprintln!("--sink requires a path argument");
                    process::exit(2);
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: session [--sink <path>]");
                process::exit(2);
            }
        }
        i += 1;
    }

    path
}

fn run(sink_path: &str) -> Result<(), CartError> {
    let mut store = CartStore::open(JsonFileSink::open(sink_path)?)?;
    println!("Opened cart at {} ({} items)", sink_path, store.items().len());

    let mut selector = VariantSelector::new(sample_product())?;
    println!(
        "Selector ready: color={} size=none qty={}",
        selector.selected_color_code(),
        selector.quantity()
    );

    // Sold out in black S: the transition is a no-op
    selector.select_size("S")?;
    assert!(selector.selected_size().is_none());
    println!("select_size(S) was a no-op (sold out)");

    // Black M has three units; the quantity caps there
    selector.select_size("M")?;
    for _ in 0..5 {
        selector.increment()?;
    }
    println!(
        "Selected {}/{}, qty capped at {}",
        selector.selected_color_code(),
        selector.selected_size().unwrap_or_default(),
        selector.quantity()
    );

    let item = add_to_cart(&selector, &mut store)?;
    println!("Added: {} {} x{} @ {}", item.name, item.size, item.qty, item.price);

    // Switching color resets size and quantity, then a second commit
    selector.select_color("DDF0FF")?;
    selector.select_size("S")?;
    let item = add_to_cart(&selector, &mut store)?;
    println!(
        "Added: {} ({}) {} x{} @ {}",
        item.name, item.color.label, item.size, item.qty, item.price
    );

    println!("\nCart now holds {} item(s):", store.items().len());
    for (i, item) in store.items().iter().enumerate() {
        println!(
            "  {}. {} [{}] size {} x{} - {}",
            i + 1,
            item.name,
            item.color.label,
            item.size,
            item.qty,
            item.line_total()
        );
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sink_path = sink_path_from_args();
    if let Err(e) = run(&sink_path) {
        error!(error = %e, "Session failed");
        process::exit(1);
    }
}
