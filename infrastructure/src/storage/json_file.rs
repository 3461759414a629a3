//! JSON file-backed moderation store.
//!
//! Keeps the working set in an [`InMemoryModerationStore`] and rewrites the
//! whole file after every successful write. Writes go to a sibling temp
//! file first and are renamed into place, so a crash never leaves a torn
//! data file behind. A write whose file update fails is undone in memory,
//! so memory never runs ahead of disk.

use super::memory::{InMemoryModerationStore, StoreSnapshot};
use async_trait::async_trait;
use jury_application::ports::moderation_store::{
    AccountFilter, ContentFilter, ModerationStore, StoreError, StoredContent,
};
use jury_domain::{Account, AccountUpdate, ContentId, ContentItem};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Moderation store persisted as a single JSON document
pub struct JsonFileModerationStore {
    path: PathBuf,
    inner: InMemoryModerationStore,
    /// Serializes write-then-persist so the file always holds the latest state
    write_lock: Mutex<()>,
}

impl JsonFileModerationStore {
    /// Open the data file at `path`, starting empty if it does not exist
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let inner = match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                let snapshot: StoreSnapshot = serde_json::from_str(&text).map_err(|e| {
                    StoreError::InvalidRecord(format!("{}: {}", path.display(), e))
                })?;
                info!(
                    "Loaded {} accounts and {} content items from {}",
                    snapshot.accounts.len(),
                    snapshot.content.len(),
                    path.display()
                );
                InMemoryModerationStore::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", path.display());
                InMemoryModerationStore::new()
            }
            Err(e) => {
                return Err(StoreError::Io(format!("{}: {}", path.display(), e)));
            }
        };

        Ok(Self {
            path,
            inner,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist after a write, or put memory back to `before`
    async fn persist_or_restore(&self, before: StoreSnapshot) -> Result<(), StoreError> {
        if let Err(e) = self.persist().await {
            warn!("Write to {} failed, undoing it in memory: {}", self.path.display(), e);
            self.inner.restore(before)?;
            return Err(e);
        }
        Ok(())
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let snapshot = self.inner.snapshot()?;
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::Other(format!("serialize store: {}", e)))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Io(format!("{}: {}", path.display(), e))
}

#[async_trait]
impl ModerationStore for JsonFileModerationStore {
    async fn get_content(&self, id: &ContentId) -> Result<Option<StoredContent>, StoreError> {
        self.inner.get_content(id).await
    }

    async fn commit_content(
        &self,
        item: &ContentItem,
        expected_revision: u64,
    ) -> Result<u64, StoreError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot()?;
        let revision = self.inner.commit_content(item, expected_revision).await?;
        self.persist_or_restore(before).await?;
        Ok(revision)
    }

    async fn delete_content(
        &self,
        id: &ContentId,
        expected_revision: u64,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot()?;
        self.inner.delete_content(id, expected_revision).await?;
        self.persist_or_restore(before).await
    }

    async fn insert_content(&self, item: ContentItem) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot()?;
        self.inner.insert_content(item).await?;
        self.persist_or_restore(before).await
    }

    async fn list_content(&self, filter: &ContentFilter) -> Result<Vec<ContentItem>, StoreError> {
        self.inner.list_content(filter).await
    }

    async fn list_accounts(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        self.inner.list_accounts(filter).await
    }

    async fn get_account(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.inner.get_account(email).await
    }

    async fn update_account(
        &self,
        email: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot()?;
        let account = self.inner.update_account(email, update).await?;
        if account.is_some() {
            self.persist_or_restore(before).await?;
        }
        Ok(account)
    }

    async fn insert_account(&self, account: Account) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot()?;
        self.inner.insert_account(account).await?;
        self.persist_or_restore(before).await
    }
}
