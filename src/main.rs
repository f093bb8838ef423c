//! # Bar Capacity Demo
//!
//! Opens the bar from `config.json` (or the file named by `BAR_CONFIG`), sends a few orders
//! through admission, and prints the order list before and after the serving delay.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use bar_capacity::clients::OrderClient;
use bar_capacity::framework::ActorClient;
use bar_capacity::lifecycle::{setup_tracing, BarConfig, BarSystem};
use bar_capacity::model::{OrderView, StatusLabels};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = BarConfig::from_env().map_err(|e| e.to_string())?;
    let system = BarSystem::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("rush_hour");
    async {
        for (customer, drink) in [
            ("alice", "beer"),
            ("alice", "cocktail"),
            ("bob", "Cocktail"),
            ("carol", "beer"),
            ("dave", "water"),
        ] {
            match system.order_client.submit(customer, drink).await {
                Ok(order) => info!(id = %order.id, customer, drink, "Served"),
                Err(e) => warn!(status = e.http_status(), error = %e, customer, drink, "Refused"),
            }
        }
    }
    .instrument(span)
    .await;

    print_orders(&system.order_client, system.labels()).await?;

    info!(serving_time = ?config.serving_time(), "Waiting for the drinks to be served");
    tokio::time::sleep(config.serving_time() + std::time::Duration::from_millis(100)).await;

    print_orders(&system.order_client, system.labels()).await?;

    let capacity = system.order_client.capacity().await.map_err(|e| e.to_string())?;
    info!(occupied = capacity.occupied, ceiling = capacity.ceiling, "Bar closing");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn print_orders(client: &OrderClient, labels: &StatusLabels) -> Result<(), String> {
    let orders = client.list_all().await.map_err(|e| e.to_string())?;
    let views: Vec<OrderView> = orders.iter().map(|order| order.view(labels)).collect();
    let json = serde_json::to_string_pretty(&views).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
