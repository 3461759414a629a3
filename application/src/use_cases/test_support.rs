//! Test doubles shared by the use case tests.

use crate::ports::moderation_logger::{ModerationEvent, ModerationLogger};
use crate::ports::moderation_store::{
    AccountFilter, ContentFilter, ModerationStore, StoreError, StoredContent,
};
use async_trait::async_trait;
use jury_domain::{Account, AccountUpdate, ContentId, ContentItem};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

// ==================== MockStore ====================

/// In-memory store with knobs for injecting conflicts and failures.
#[derive(Default)]
pub(crate) struct MockStore {
    contents: Mutex<BTreeMap<ContentId, StoredContent>>,
    accounts: Mutex<BTreeMap<String, Account>>,
    /// Content writes to reject with a conflict before letting one through
    pending_conflicts: AtomicU32,
    /// Accounts whose updates fail with an I/O error
    failing_accounts: Mutex<HashSet<String>>,
    /// Successful content commits
    pub commits: AtomicU32,
}

impl MockStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_account(&self, account: Account) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.email.clone(), account);
    }

    pub(crate) fn add_content(&self, item: ContentItem) {
        self.contents.lock().unwrap().insert(
            item.id.clone(),
            StoredContent { item, revision: 0 },
        );
    }

    pub(crate) fn content(&self, id: &str) -> Option<ContentItem> {
        self.contents
            .lock()
            .unwrap()
            .get(&ContentId::new(id))
            .map(|stored| stored.item.clone())
    }

    pub(crate) fn account(&self, email: &str) -> Account {
        self.accounts.lock().unwrap().get(email).cloned().unwrap()
    }

    pub(crate) fn conflict_next(&self, n: u32) {
        self.pending_conflicts.store(n, Ordering::SeqCst);
    }

    pub(crate) fn fail_updates_for(&self, email: &str) {
        self.failing_accounts
            .lock()
            .unwrap()
            .insert(email.to_string());
    }

    fn take_conflict(&self) -> bool {
        self.pending_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl ModerationStore for MockStore {
    async fn get_content(&self, id: &ContentId) -> Result<Option<StoredContent>, StoreError> {
        Ok(self.contents.lock().unwrap().get(id).cloned())
    }

    async fn commit_content(
        &self,
        item: &ContentItem,
        expected_revision: u64,
    ) -> Result<u64, StoreError> {
        let conflict = || StoreError::Conflict {
            id: item.id.clone(),
            expected: expected_revision,
        };
        if self.take_conflict() {
            // Simulate a concurrent writer bumping the revision
            if let Some(stored) = self.contents.lock().unwrap().get_mut(&item.id) {
                stored.revision += 1;
            }
            return Err(conflict());
        }
        let mut contents = self.contents.lock().unwrap();
        let stored = contents.get_mut(&item.id).ok_or_else(conflict)?;
        if stored.revision != expected_revision {
            return Err(conflict());
        }
        stored.item = item.clone();
        stored.revision += 1;
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(stored.revision)
    }

    async fn delete_content(
        &self,
        id: &ContentId,
        expected_revision: u64,
    ) -> Result<(), StoreError> {
        let mut contents = self.contents.lock().unwrap();
        match contents.get(id) {
            Some(stored) if stored.revision == expected_revision => {
                contents.remove(id);
                Ok(())
            }
            _ => Err(StoreError::Conflict {
                id: id.clone(),
                expected: expected_revision,
            }),
        }
    }

    async fn insert_content(&self, item: ContentItem) -> Result<(), StoreError> {
        let mut contents = self.contents.lock().unwrap();
        if contents.contains_key(&item.id) {
            return Err(StoreError::ContentExists(item.id));
        }
        contents.insert(item.id.clone(), StoredContent { item, revision: 0 });
        Ok(())
    }

    async fn list_content(&self, filter: &ContentFilter) -> Result<Vec<ContentItem>, StoreError> {
        Ok(self
            .contents
            .lock()
            .unwrap()
            .values()
            .filter(|stored| filter.matches(&stored.item))
            .map(|stored| stored.item.clone())
            .collect())
    }

    async fn list_accounts(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn get_account(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.lock().unwrap().get(email).cloned())
    }

    async fn update_account(
        &self,
        email: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>, StoreError> {
        if self.failing_accounts.lock().unwrap().contains(email) {
            return Err(StoreError::Io(format!("write to {} failed", email)));
        }
        let mut accounts = self.accounts.lock().unwrap();
        Ok(accounts.get_mut(email).map(|account| {
            account.apply(update);
            account.clone()
        }))
    }

    async fn insert_account(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&account.email) {
            return Err(StoreError::AccountExists(account.email));
        }
        accounts.insert(account.email.clone(), account);
        Ok(())
    }
}

// ==================== RecordingLogger ====================

/// Logger that keeps every event for inspection.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<ModerationEvent>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type)
            .collect()
    }

    pub(crate) fn events_of(&self, event_type: &str) -> Vec<ModerationEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }
}

impl ModerationLogger for RecordingLogger {
    fn log(&self, event: ModerationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ==================== Fixtures ====================

/// Juror emails `juror-0@example.com` .. `juror-{n-1}@example.com`
pub(crate) fn juror_emails(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("juror-{}@example.com", i)).collect()
}
