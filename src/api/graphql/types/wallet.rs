use async_graphql::{Object, SimpleObject, ID};

use crate::api::graphql::types::MoneyObject;
use crate::store::Wallet;

/// A stored record with money-valued columns.
pub struct WalletType {
    wallet: Wallet,
}

impl WalletType {
    pub fn new(wallet: Wallet) -> Self {
        Self { wallet }
    }
}

#[Object(name = "Wallet")]
impl WalletType {
    async fn id(&self) -> ID {
        ID(self.wallet.id.to_string())
    }

    /// The wallet's main money column
    async fn balance(&self) -> MoneyObject {
        MoneyObject::new(self.wallet.balance.clone())
    }

    /// The wallet's optional second money column
    async fn savings(&self) -> Option<MoneyObject> {
        self.wallet.savings.clone().map(MoneyObject::new)
    }
}

/// Mutation result: the affected wallet plus a success flag.
#[derive(SimpleObject)]
#[graphql(name = "WalletPayload")]
pub struct WalletPayload {
    pub wallet: Option<WalletType>,
    pub success: bool,
}
