use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tempus_clock::{ClockTicker, LatestValue};
use tempus_core::SystemTimeSource;
use tempus_server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let epoch_display = Arc::new(LatestValue::new());
    let date_display = Arc::new(LatestValue::new());

    // The ticker keeps the index page's clock readout current for the
    // lifetime of the process.
    let mut ticker = ClockTicker::new(
        Arc::new(SystemTimeSource),
        epoch_display.clone(),
        date_display.clone(),
    );
    ticker.start();

    let state = AppState {
        epoch_display,
        date_display,
    };

    let addr = std::env::var("TEMPUS_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "serving timestamp conversions");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
