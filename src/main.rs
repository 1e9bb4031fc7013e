use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use money_gateway::{GatewayOptions, MoneyGateway};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = GatewayOptions::parse();

    tracing::info!("Configuration:");
    tracing::info!("  Listen: {}:{}", opts.listen_host, opts.listen_port);
    tracing::info!("  Base currency: {}", opts.base_currency);
    tracing::info!("  Decimal places: {}", opts.decimal_places);
    tracing::info!("  Locale: {}", opts.locale);

    let gateway = MoneyGateway::new(opts);
    gateway.run().await?;

    Ok(())
}
