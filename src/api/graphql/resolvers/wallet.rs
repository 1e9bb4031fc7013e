use async_graphql::{Context, Result, ID};

use crate::api::graphql::{
    context::ApiContext,
    types::{MoneyInput, WalletPayload, WalletType},
};

fn parse_id(id: &ID) -> Result<u64> {
    id.parse::<u64>()
        .map_err(|_| async_graphql::Error::new(format!("invalid wallet id {:?}", id.as_str())))
}

/// Resolves a wallet by its id
///
/// # Errors
/// Returns an error if the id is not a valid integer
pub async fn resolve_wallet(ctx: &Context<'_>, id: &ID) -> Result<Option<WalletType>> {
    let store = &ctx.data_unchecked::<ApiContext>().store;
    let id = parse_id(id)?;
    Ok(store.get(id).await.map(WalletType::new))
}

/// Resolves all wallets, oldest first
pub async fn resolve_wallets(ctx: &Context<'_>) -> Result<Vec<WalletType>> {
    let store = &ctx.data_unchecked::<ApiContext>().store;
    Ok(store
        .list()
        .await
        .into_iter()
        .map(WalletType::new)
        .collect())
}

/// Creates a wallet from mutation input, rounding amounts to the
/// configured decimal places before storing
///
/// # Errors
/// Returns an error if an amount does not parse as a decimal number
pub async fn resolve_create_wallet(
    ctx: &Context<'_>,
    balance: MoneyInput,
    savings: Option<MoneyInput>,
) -> Result<WalletPayload> {
    let api = ctx.data_unchecked::<ApiContext>();
    let balance = balance.money()?.rounded(api.config.decimal_places);
    let savings = savings
        .map(|input| input.money())
        .transpose()?
        .map(|value| value.rounded(api.config.decimal_places));

    let wallet = api.store.create(balance, savings).await;
    tracing::info!(wallet_id = wallet.id, "created wallet");

    Ok(WalletPayload {
        wallet: Some(WalletType::new(wallet)),
        success: true,
    })
}

/// Replaces a wallet's balance with the parsed mutation input
///
/// # Errors
/// Returns an error if the id is invalid or the amount does not parse
pub async fn resolve_update_balance(
    ctx: &Context<'_>,
    id: &ID,
    money: MoneyInput,
) -> Result<WalletPayload> {
    let api = ctx.data_unchecked::<ApiContext>();
    let id = parse_id(id)?;
    let value = money.money()?.rounded(api.config.decimal_places);

    match api.store.update_balance(id, value).await {
        Some(wallet) => {
            tracing::info!(wallet_id = id, "updated wallet balance");
            Ok(WalletPayload {
                wallet: Some(WalletType::new(wallet)),
                success: true,
            })
        }
        None => Ok(WalletPayload {
            wallet: None,
            success: false,
        }),
    }
}
