use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use crate::api::graphql::{
    context::ApiContext,
    resolvers::{MutationRoot, QueryRoot},
    types::{CurrencyObject, MoneyObject, WalletType},
};
use crate::config::MoneyConfig;
use crate::store::WalletStore;

/// Type alias for the complete GraphQL schema
#[allow(clippy::module_name_repetitions)]
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create a new GraphQL schema over the given store and money config
#[must_use]
#[allow(clippy::module_name_repetitions)]
pub fn create_schema(store: Arc<WalletStore>, config: MoneyConfig) -> GatewaySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(ApiContext::new(store, config))
        .register_output_type::<MoneyObject>()
        .register_output_type::<CurrencyObject>()
        .register_output_type::<WalletType>()
        .finish()
}
