//! In-memory moderation store.
//!
//! Holds every content item with its revision and every account behind a
//! single `RwLock`. Conditional writes check the revision under the write
//! lock, so a commit either lands on the state it was computed from or
//! reports a conflict.

use async_trait::async_trait;
use jury_application::ports::moderation_store::{
    AccountFilter, ContentFilter, ModerationStore, StoreError, StoredContent,
};
use jury_domain::{Account, AccountUpdate, ContentId, ContentItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Serialized form of a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub accounts: Vec<Account>,
    pub content: Vec<ContentRecord>,
}

/// A content item with its revision, as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default)]
    pub revision: u64,
    pub item: ContentItem,
}

#[derive(Debug, Default)]
struct State {
    contents: BTreeMap<ContentId, StoredContent>,
    accounts: BTreeMap<String, Account>,
}

impl State {
    fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self, StoreError> {
        let mut state = State::default();

        for account in snapshot.accounts {
            if account.email.trim().is_empty() {
                return Err(StoreError::InvalidRecord(
                    "account with empty email".to_string(),
                ));
            }
            if state.accounts.contains_key(&account.email) {
                return Err(StoreError::InvalidRecord(format!(
                    "duplicate account {}",
                    account.email
                )));
            }
            state.accounts.insert(account.email.clone(), account);
        }

        for record in snapshot.content {
            let id = record.item.id.clone();
            if id.as_str().trim().is_empty() {
                return Err(StoreError::InvalidRecord(
                    "content item with empty id".to_string(),
                ));
            }
            if state.contents.contains_key(&id) {
                return Err(StoreError::InvalidRecord(format!(
                    "duplicate content item {}",
                    id
                )));
            }
            state.contents.insert(
                id,
                StoredContent {
                    item: record.item,
                    revision: record.revision,
                },
            );
        }

        Ok(state)
    }
}

/// Moderation store kept entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryModerationStore {
    state: RwLock<State>,
}

impl InMemoryModerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot, rejecting duplicate keys
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self, StoreError> {
        Ok(Self {
            state: RwLock::new(State::from_snapshot(snapshot)?),
        })
    }

    /// Replace the whole state with `snapshot`
    pub fn restore(&self, snapshot: StoreSnapshot) -> Result<(), StoreError> {
        let state = State::from_snapshot(snapshot)?;
        *self.write()? = state;
        Ok(())
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let state = self.read()?;
        Ok(StoreSnapshot {
            accounts: state.accounts.values().cloned().collect(),
            content: state
                .contents
                .values()
                .map(|stored| ContentRecord {
                    revision: stored.revision,
                    item: stored.item.clone(),
                })
                .collect(),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Other("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Other("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ModerationStore for InMemoryModerationStore {
    async fn get_content(&self, id: &ContentId) -> Result<Option<StoredContent>, StoreError> {
        Ok(self.read()?.contents.get(id).cloned())
    }

    async fn commit_content(
        &self,
        item: &ContentItem,
        expected_revision: u64,
    ) -> Result<u64, StoreError> {
        let mut state = self.write()?;
        match state.contents.get_mut(&item.id) {
            Some(stored) if stored.revision == expected_revision => {
                stored.item = item.clone();
                stored.revision += 1;
                Ok(stored.revision)
            }
            _ => Err(StoreError::Conflict {
                id: item.id.clone(),
                expected: expected_revision,
            }),
        }
    }

    async fn delete_content(
        &self,
        id: &ContentId,
        expected_revision: u64,
    ) -> Result<(), StoreError> {
        let mut state = self.write()?;
        match state.contents.get(id) {
            Some(stored) if stored.revision == expected_revision => {
                state.contents.remove(id);
                Ok(())
            }
            _ => Err(StoreError::Conflict {
                id: id.clone(),
                expected: expected_revision,
            }),
        }
    }

    async fn insert_content(&self, item: ContentItem) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if state.contents.contains_key(&item.id) {
            return Err(StoreError::ContentExists(item.id));
        }
        state
            .contents
            .insert(item.id.clone(), StoredContent { item, revision: 0 });
        Ok(())
    }

    async fn list_content(&self, filter: &ContentFilter) -> Result<Vec<ContentItem>, StoreError> {
        Ok(self
            .read()?
            .contents
            .values()
            .filter(|stored| filter.matches(&stored.item))
            .map(|stored| stored.item.clone())
            .collect())
    }

    async fn list_accounts(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .read()?
            .accounts
            .values()
            .filter(|account| filter.matches(account))
            .cloned()
            .collect())
    }

    async fn get_account(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.read()?.accounts.get(email).cloned())
    }

    async fn update_account(
        &self,
        email: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>, StoreError> {
        let mut state = self.write()?;
        Ok(state.accounts.get_mut(email).map(|account| {
            account.apply(update);
            account.clone()
        }))
    }

    async fn insert_account(&self, account: Account) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if state.accounts.contains_key(&account.email) {
            return Err(StoreError::AccountExists(account.email));
        }
        state.accounts.insert(account.email.clone(), account);
        Ok(())
    }
}
