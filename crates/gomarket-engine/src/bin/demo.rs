//! # Cart Engine Demo
//!
//! Exercises the cart engine end to end against a real SQLite store.
//!
//! ## Usage
//! ```bash
//! # Default database path (./gomarket_dev.db)
//! cargo run -p gomarket-engine --bin demo
//!
//! # Specify database path
//! cargo run -p gomarket-engine --bin demo -- --db ./data/cart.db
//! ```
//!
//! Run it twice: the second run starts from the cart the first run left
//! behind, demonstrating the persistence round-trip.

use std::env;
use std::sync::Arc;

use gomarket_engine::{CartEngine, ProductInfo, SqliteStore, StoreConfig};
use tracing_subscriber::EnvFilter;

/// A handful of catalog entries to play with.
const CATALOG: &[(&str, &str, f64)] = &[
    ("coffee-250", "Ground Coffee 250g", 7.5),
    ("tea-20", "Green Tea 20 Bags", 3.25),
    ("honey-500", "Wildflower Honey 500g", 9.0),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./gomarket_dev.db");

    let mut i = 1;
    while i < args.len() {
        if args[i].as_str() == "--db" {
            if i + 1 < args.len() {
                db_path = args[i + 1].clone();
                i += 1;
            }
        }
        i += 1;
    }

    let store = Arc::new(SqliteStore::new(StoreConfig::new(&db_path)).await?);
    let engine = CartEngine::initialize(store.clone()).await;

    println!("Cart on startup:");
    print_cart(&engine);

    let mut products = engine.subscribe();

    for (id, title, price) in CATALOG {
        engine
            .add_to_cart(ProductInfo {
                id: (*id).to_string(),
                title: (*title).to_string(),
                image_url: format!("https://cdn.gomarket.dev/{}.png", id),
                price: *price,
            })
            .await;
    }

    // Repeat add merges instead of duplicating
    engine.increment("coffee-250").await?;
    engine.decrement("tea-20").await?;

    // The subscription saw every change; borrow the latest value
    let latest = products.borrow_and_update().clone();
    println!("\nSubscriber sees {} entries after mutations", latest.len());

    println!("\nCart after mutations:");
    print_cart(&engine);

    store.close().await;
    println!("\nRun again to see the cart restored from {}", db_path);

    Ok(())
}

fn print_cart(engine: &CartEngine) {
    for item in engine.products() {
        println!(
            "  {:>3} x {:<24} {:>8.2}",
            item.quantity,
            item.title,
            item.line_total()
        );
    }

    let totals = engine.totals();
    println!(
        "  ── {} items, total {:.2}",
        totals.total_quantity, totals.total_price
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gomarket=trace` - Show trace for gomarket crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gomarket=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
