pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod money;
pub mod options;
pub mod store;

pub use config::MoneyConfig;
pub use error::MoneyError;
pub use money::{CurrencyCode, MoneyValue};
pub use options::GatewayOptions;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    routing::{get, post},
    Router, Server,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::store::WalletStore;

pub struct MoneyGateway {
    options: GatewayOptions,
}

impl MoneyGateway {
    pub fn new(options: GatewayOptions) -> Self {
        Self { options }
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.options.money_config()?;
        let store = Arc::new(WalletStore::new());
        let schema = crate::api::graphql::schema::create_schema(store, config);

        let api_router = Router::new()
            .route("/graphql", post(crate::api::handlers::graphql_handler))
            .route("/graphql/playground", get(crate::api::handlers::graphiql))
            .route("/health", get(crate::api::handlers::health_check))
            .layer(Extension(schema))
            .layer(CorsLayer::permissive());

        let addr = format!("{}:{}", self.options.listen_host, self.options.listen_port)
            .parse::<SocketAddr>()
            .context("invalid listen address")?;
        info!("Starting API server on {}", addr);

        Server::bind(&addr)
            .serve(api_router.into_make_service())
            .await
            .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

        Ok(())
    }
}
