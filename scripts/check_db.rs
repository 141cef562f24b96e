//! Run with: cargo run --bin check_db

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let state = logbase::bootstrap(None).await?;
    let store = state.store;

    println!("Pinging MongoDB database '{}'...", store.db_name());
    store.ping().await?;
    println!("✓ Server reachable");

    println!("\nExpected collections:");
    for name in store.collection_names() {
        println!("  - {}", name);
    }

    println!("\nCollections present:");
    let collections = store.database().list_collection_names().await?;
    for name in &collections {
        println!("  - {}", name);
    }

    store.shutdown().await;
    println!("\n✓ Check complete!");
    Ok(())
}
