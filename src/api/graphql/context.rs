use std::sync::Arc;

use crate::config::MoneyConfig;
use crate::store::WalletStore;

/// Context for GraphQL resolvers to access shared resources
pub struct ApiContext {
    /// Wallet storage
    pub store: Arc<WalletStore>,
    /// Money formatting configuration
    pub config: MoneyConfig,
}

impl ApiContext {
    /// Create a new context over the given store and config
    pub fn new(store: Arc<WalletStore>, config: MoneyConfig) -> Self {
        Self { store, config }
    }
}
