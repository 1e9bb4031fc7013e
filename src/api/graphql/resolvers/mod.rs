mod wallet;

use async_graphql::Object;

use wallet::{resolve_create_wallet, resolve_update_balance, resolve_wallet, resolve_wallets};

/// Root query type that combines all GraphQL queries
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a wallet by id
    async fn wallet(
        &self,
        ctx: &async_graphql::Context<'_>,
        id: async_graphql::ID,
    ) -> async_graphql::Result<Option<crate::api::graphql::types::WalletType>> {
        resolve_wallet(ctx, &id).await
    }

    /// Get all wallets, oldest first
    async fn wallets(
        &self,
        ctx: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<Vec<crate::api::graphql::types::WalletType>> {
        resolve_wallets(ctx).await
    }
}

/// Root mutation type that combines all GraphQL mutations
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a wallet with an initial balance
    async fn create_wallet(
        &self,
        ctx: &async_graphql::Context<'_>,
        balance: crate::api::graphql::types::MoneyInput,
        savings: Option<crate::api::graphql::types::MoneyInput>,
    ) -> async_graphql::Result<crate::api::graphql::types::WalletPayload> {
        resolve_create_wallet(ctx, balance, savings).await
    }

    /// Replace a wallet's balance
    async fn update_balance(
        &self,
        ctx: &async_graphql::Context<'_>,
        id: async_graphql::ID,
        money: crate::api::graphql::types::MoneyInput,
    ) -> async_graphql::Result<crate::api::graphql::types::WalletPayload> {
        resolve_update_balance(ctx, &id, money).await
    }
}
