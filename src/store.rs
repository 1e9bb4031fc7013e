use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::money::MoneyValue;

/// A stored record with one required and one optional money column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: u64,
    pub balance: MoneyValue,
    pub savings: Option<MoneyValue>,
}

/// In-memory wallet storage. Stands in for the external persistence
/// collaborator; the gateway only needs get/update semantics over records
/// with money-valued fields.
pub struct WalletStore {
    wallets: RwLock<HashMap<u64, Wallet>>,
    next_id: AtomicU64,
}

impl WalletStore {
    pub fn new() -> Self {
        Self {
            wallets: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub async fn create(&self, balance: MoneyValue, savings: Option<MoneyValue>) -> Wallet {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let wallet = Wallet {
            id,
            balance,
            savings,
        };
        self.wallets.write().await.insert(id, wallet.clone());
        wallet
    }

    pub async fn get(&self, id: u64) -> Option<Wallet> {
        self.wallets.read().await.get(&id).cloned()
    }

    pub async fn list(&self) -> Vec<Wallet> {
        let mut wallets: Vec<_> = self.wallets.read().await.values().cloned().collect();
        wallets.sort_by_key(|wallet| wallet.id);
        wallets
    }

    /// Replace the balance of an existing wallet. Returns the updated row,
    /// or `None` if the id is unknown.
    pub async fn update_balance(&self, id: u64, balance: MoneyValue) -> Option<Wallet> {
        let mut wallets = self.wallets.write().await;
        let wallet = wallets.get_mut(&id)?;
        wallet.balance = balance;
        Some(wallet.clone())
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn money(amount: &str, code: &str) -> MoneyValue {
        MoneyValue::new(Decimal::from_str(amount).unwrap(), code)
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = WalletStore::new();
            let first = store.create(money("1.00", "USD"), None).await;
            let second = store.create(money("2.00", "EUR"), None).await;

            assert_eq!(first.id, 1);
            assert_eq!(second.id, 2);
            assert_eq!(store.list().await.len(), 2);
        });
    }

    #[test]
    fn update_balance_replaces_the_value() {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = WalletStore::new();
            let wallet = store.create(money("1.00", "USD"), None).await;

            let updated = store
                .update_balance(wallet.id, money("456.78", "GBP"))
                .await
                .unwrap();

            assert_eq!(updated.balance, money("456.78", "GBP"));
            assert_eq!(store.get(wallet.id).await.unwrap().balance, updated.balance);
        });
    }

    #[test]
    fn update_balance_of_unknown_id_is_none() {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = WalletStore::new();
            assert!(store.update_balance(42, money("1.00", "USD")).await.is_none());
        });
    }
}
