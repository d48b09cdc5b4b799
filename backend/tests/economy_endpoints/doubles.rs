//! In-memory test doubles for the driven storage ports.
//!
//! The doubles honour the same contracts as the Diesel adapters: purchases
//! commit debit and grant under one lock, duplicate grants surface as
//! conflicts, and balances clamp at zero on generic adjustments.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use backend::domain::ports::{
    AccountRepository, AccountRepositoryError, CatalogRepository, CatalogRepositoryError,
    MessageRepository, MessageRepositoryError, OwnershipLedger, OwnershipLedgerError,
    ProfileQuery, ProfileQueryError, PurchaseRepository, PurchaseRepositoryError,
    ScoreRepository, ScoreRepositoryError,
};
use backend::domain::{
    Account, CatalogItem, ItemCategory, Message, ProfileSnapshot, ProfileUpdate, ScoreEntry,
    Username,
};

#[derive(Default)]
struct EconomyState {
    accounts: HashMap<String, Account>,
    owned: HashSet<(String, String)>,
}

/// Single-lock store backing all economy ports.
///
/// One mutex over accounts and ownership makes the purchase path a real
/// transaction: no interleaving can observe a debit without its grant.
pub struct InMemoryEconomyStore {
    state: Mutex<EconomyState>,
    catalog: Vec<CatalogItem>,
}

impl InMemoryEconomyStore {
    pub fn new(catalog: Vec<CatalogItem>) -> Self {
        Self {
            state: Mutex::new(EconomyState::default()),
            catalog,
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            CatalogItem {
                key: "skin_blue".to_owned(),
                category: ItemCategory::Player,
                display_name: "Blue Skin".to_owned(),
                price: 50,
                img: "/static/img/skin_blue.png".to_owned(),
            },
            CatalogItem {
                key: "skin_red".to_owned(),
                category: ItemCategory::Player,
                display_name: "Red Skin".to_owned(),
                price: 75,
                img: "/static/img/skin_red.png".to_owned(),
            },
            CatalogItem {
                key: "enemy_ghost".to_owned(),
                category: ItemCategory::Enemy,
                display_name: "Ghost Enemy".to_owned(),
                price: 40,
                img: "/static/img/enemy_ghost.png".to_owned(),
            },
        ])
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EconomyState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Current committed balance, if the account exists.
    pub fn balance(&self, username: &str) -> Option<i64> {
        self.lock().accounts.get(username).map(|a| a.coins)
    }
}

fn entry<'a>(state: &'a mut EconomyState, username: &Username) -> &'a mut Account {
    state
        .accounts
        .entry(username.as_str().to_owned())
        .or_insert_with(|| Account::new(username.clone()))
}

#[async_trait]
impl AccountRepository for InMemoryEconomyStore {
    async fn get_or_create(&self, username: &Username) -> Result<Account, AccountRepositoryError> {
        let mut state = self.lock();
        Ok(entry(&mut state, username).clone())
    }

    async fn adjust_coins(
        &self,
        username: &Username,
        delta: i64,
    ) -> Result<i64, AccountRepositoryError> {
        let mut state = self.lock();
        let account = entry(&mut state, username);
        account.coins = (account.coins + delta).max(0);
        Ok(account.coins)
    }

    async fn set_equipped(
        &self,
        username: &Username,
        category: ItemCategory,
        item_key: &str,
    ) -> Result<(), AccountRepositoryError> {
        let mut state = self.lock();
        let account = entry(&mut state, username);
        match category {
            ItemCategory::Player => account.player_skin = item_key.to_owned(),
            ItemCategory::Enemy => account.enemy_skin = item_key.to_owned(),
        }
        Ok(())
    }

    async fn set_profile(
        &self,
        username: &Username,
        update: &ProfileUpdate,
    ) -> Result<Account, AccountRepositoryError> {
        let mut state = self.lock();
        let account = entry(&mut state, username);
        if let Some(player_skin) = &update.player_skin {
            account.player_skin = player_skin.clone();
        }
        if let Some(enemy_skin) = &update.enemy_skin {
            account.enemy_skin = enemy_skin.clone();
        }
        if let Some(coins) = update.coins {
            account.coins = coins.max(0);
        }
        Ok(account.clone())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryEconomyStore {
    async fn list(&self) -> Result<Vec<CatalogItem>, CatalogRepositoryError> {
        Ok(self.catalog.clone())
    }

    async fn find_by_key(
        &self,
        key: &str,
    ) -> Result<Option<CatalogItem>, CatalogRepositoryError> {
        Ok(self.catalog.iter().find(|item| item.key == key).cloned())
    }
}

#[async_trait]
impl OwnershipLedger for InMemoryEconomyStore {
    async fn is_owned(
        &self,
        username: &Username,
        item_key: &str,
    ) -> Result<bool, OwnershipLedgerError> {
        let state = self.lock();
        Ok(state
            .owned
            .contains(&(username.as_str().to_owned(), item_key.to_owned())))
    }

    async fn grant(
        &self,
        username: &Username,
        item_key: &str,
    ) -> Result<(), OwnershipLedgerError> {
        let mut state = self.lock();
        let inserted = state
            .owned
            .insert((username.as_str().to_owned(), item_key.to_owned()));
        if inserted {
            Ok(())
        } else {
            Err(OwnershipLedgerError::duplicate_grant(
                username.as_str(),
                item_key,
            ))
        }
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryEconomyStore {
    async fn debit_and_grant(
        &self,
        username: &Username,
        item_key: &str,
        price: i64,
    ) -> Result<i64, PurchaseRepositoryError> {
        let mut state = self.lock();

        let pair = (username.as_str().to_owned(), item_key.to_owned());
        if state.owned.contains(&pair) {
            return Err(PurchaseRepositoryError::already_owned(item_key));
        }

        let balance = state
            .accounts
            .get(username.as_str())
            .map(|account| account.coins)
            .unwrap_or(0);
        if balance < price {
            return Err(PurchaseRepositoryError::insufficient_funds(balance, price));
        }

        state.owned.insert(pair);
        let account = entry(&mut state, username);
        account.coins -= price;
        Ok(account.coins)
    }
}

#[async_trait]
impl ProfileQuery for InMemoryEconomyStore {
    async fn fetch(
        &self,
        username: &Username,
    ) -> Result<Option<ProfileSnapshot>, ProfileQueryError> {
        let state = self.lock();
        let Some(account) = state.accounts.get(username.as_str()) else {
            return Ok(None);
        };
        let mut owned: Vec<String> = state
            .owned
            .iter()
            .filter(|(owner, _)| owner == username.as_str())
            .map(|(_, key)| key.clone())
            .collect();
        owned.sort();
        Ok(Some(ProfileSnapshot::from_account(account.clone(), owned)))
    }
}

/// In-memory score store ordered on read, mirroring the SQL adapter.
#[derive(Default)]
pub struct InMemoryScoreStore {
    rows: Mutex<Vec<ScoreEntry>>,
}

#[async_trait]
impl ScoreRepository for InMemoryScoreStore {
    async fn top(&self, limit: i64) -> Result<Vec<ScoreEntry>, ScoreRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        rows.sort_by(|a, b| {
            b.survival_time
                .partial_cmp(&a.survival_time)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn submit(
        &self,
        username: &Username,
        survival_time: f64,
    ) -> Result<ScoreEntry, ScoreRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let entry = ScoreEntry {
            id: i32::try_from(rows.len()).unwrap_or(i32::MAX) + 1,
            username: username.clone(),
            survival_time,
            created_at: Utc::now(),
        };
        rows.push(entry.clone());
        Ok(entry)
    }
}

/// In-memory message store preserving insertion order.
#[derive(Default)]
pub struct InMemoryMessageStore {
    rows: Mutex<Vec<Message>>,
}

#[async_trait]
impl MessageRepository for InMemoryMessageStore {
    async fn list(&self, limit: i64) -> Result<Vec<Message>, MessageRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn post(
        &self,
        username: &Username,
        content: &str,
    ) -> Result<Message, MessageRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let message = Message {
            id: i32::try_from(rows.len()).unwrap_or(i32::MAX) + 1,
            content: content.to_owned(),
            username: username.clone(),
            created_at: Utc::now(),
        };
        rows.push(message.clone());
        Ok(message)
    }

    async fn delete(&self, id: i32) -> Result<bool, MessageRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = rows.len();
        rows.retain(|message| message.id != id);
        Ok(rows.len() != before)
    }
}

/// Purchase unit that mutates and then aborts, the way a rolled-back
/// transaction does: after the failure no trace of the debit or the grant
/// remains observable.
pub struct AbortingPurchases {
    store: Arc<InMemoryEconomyStore>,
}

impl AbortingPurchases {
    pub fn new(store: Arc<InMemoryEconomyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PurchaseRepository for AbortingPurchases {
    async fn debit_and_grant(
        &self,
        username: &Username,
        item_key: &str,
        price: i64,
    ) -> Result<i64, PurchaseRepositoryError> {
        let mut state = self.store.lock();
        let pair = (username.as_str().to_owned(), item_key.to_owned());
        state.owned.insert(pair.clone());
        let account = entry(&mut state, username);
        account.coins -= price;
        // Undo both writes before surfacing the failure, as ROLLBACK would.
        account.coins += price;
        state.owned.remove(&pair);
        Err(PurchaseRepositoryError::failed(
            "storage failure after debit",
        ))
    }
}
