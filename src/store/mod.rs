//! Contact store backed by a single JSON file.
//!
//! The store keeps the whole collection in memory and writes a full snapshot
//! after every mutation. It is an ordinary owned value: construct one per data
//! file and pass it to whatever needs it.

pub mod snapshot;

use crate::error::{StoreError, StoreResult};
use crate::metrics::{Metrics, SaveTimer};
use crate::models::{Contact, ContactUpdate, SortKey};
use snapshot::{BACKUP_SUFFIX, TEMP_SUFFIX};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened when a corrupted data file was found at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRecovery {
    /// Where the unreadable file was moved
    pub backup_path: PathBuf,

    /// False if the file could not be moved and was overwritten instead
    pub backed_up: bool,

    /// Read or parse failure that triggered the reset
    pub detail: String,
}

/// In-memory contact collection with durable snapshot persistence.
#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
    metrics: Metrics,
    recovery: Option<LoadRecovery>,
}

impl ContactStore {
    /// Open the store at `path`, loading existing contacts.
    ///
    /// A missing file is created empty. A file that cannot be read or parsed
    /// is moved to `<path>.bak` and replaced by an empty collection; see
    /// [`ContactStore::recovery`].
    ///
    /// # Errors
    ///
    /// Only fails if the parent directory cannot be created or the initial
    /// empty snapshot cannot be written.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with_metrics(path, Metrics::new())
    }

    /// Like [`ContactStore::open`], recording into an existing collector.
    pub fn open_with_metrics(path: impl Into<PathBuf>, metrics: Metrics) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut store = Self {
            path,
            contacts: Vec::new(),
            metrics,
            recovery: None,
        };
        store.load()?;
        Ok(store)
    }

    /// Primary data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupted data file is moved on load.
    pub fn backup_path(&self) -> PathBuf {
        snapshot::sibling_path(&self.path, BACKUP_SUFFIX)
    }

    /// Staging file used while saving.
    pub fn temp_path(&self) -> PathBuf {
        snapshot::sibling_path(&self.path, TEMP_SUFFIX)
    }

    /// Contacts in stored (insertion) order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Set when the data file was unreadable at open time.
    pub fn recovery(&self) -> Option<&LoadRecovery> {
        self.recovery.as_ref()
    }

    fn load(&mut self) -> StoreResult<()> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No contact file at {}, creating it", self.path.display());
                self.contacts.clear();
                return self.save();
            }
            Err(e) => return self.recover(e.to_string()),
        };

        match snapshot::parse(&bytes) {
            Ok(contacts) => {
                self.metrics.record_load(contacts.len());
                info!(
                    "Loaded {} contacts from {}",
                    contacts.len(),
                    self.path.display()
                );
                self.contacts = contacts;
                Ok(())
            }
            Err(e) => self.recover(e.to_string()),
        }
    }

    /// Move the unreadable file aside and continue with an empty collection.
    fn recover(&mut self, detail: String) -> StoreResult<()> {
        let backup_path = self.backup_path();
        let backed_up = match fs::rename(&self.path, &backup_path) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Could not move corrupted file {} to {}: {}",
                    self.path.display(),
                    backup_path.display(),
                    e
                );
                false
            }
        };

        info!(
            "Data file {} corrupted or unreadable, backed up to {}, starting fresh. Detail: {}",
            self.path.display(),
            backup_path.display(),
            detail
        );

        self.metrics.record_recovery();
        self.recovery = Some(LoadRecovery {
            backup_path,
            backed_up,
            detail,
        });
        self.contacts.clear();
        self.save()
    }

    /// Write the full collection to disk, replacing the previous snapshot atomically.
    pub fn save(&self) -> StoreResult<()> {
        let timer = SaveTimer::new(self.metrics.clone());
        match snapshot::write_atomic(&self.path, &self.temp_path(), &self.contacts) {
            Ok(()) => {
                timer.complete();
                debug!(
                    "Saved {} contacts to {}",
                    self.contacts.len(),
                    self.path.display()
                );
                Ok(())
            }
            Err(e) => {
                timer.complete_with_error();
                warn!("Failed to save contacts: {}", e);
                Err(e)
            }
        }
    }

    /// Persist a mutation, undoing it in memory if the write fails.
    fn persist_or_undo<F>(&mut self, undo: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Vec<Contact>),
    {
        if let Err(e) = self.save() {
            undo(&mut self.contacts);
            return Err(e);
        }
        Ok(())
    }

    /// `max(existing ids) + 1`, or 1 when empty.
    ///
    /// Recomputed from the live collection, so an id freed by deleting the
    /// highest contact is handed out again.
    fn next_id(&self) -> u64 {
        self.contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    /// Append a new contact and persist it.
    ///
    /// Fields are trimmed but not validated; run the validators first if the
    /// stored data must be well-formed.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> StoreResult<Contact> {
        let contact = Contact::new(self.next_id(), name, phone, email);
        self.contacts.push(contact.clone());
        self.persist_or_undo(|contacts| {
            contacts.pop();
        })?;

        info!("Added contact {}", contact.id);
        Ok(contact)
    }

    /// All contacts sorted ascending by `sort_by`. Ties keep stored order.
    pub fn list(&self, sort_by: impl Into<SortKey>) -> Vec<Contact> {
        let key = sort_by.into();
        let mut contacts = self.contacts.clone();
        contacts.sort_by(|a, b| key.compare(a, b));
        contacts
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Apply a partial update. Returns `None` when no contact has `id`.
    ///
    /// The snapshot is rewritten whenever the contact exists, even if no
    /// field actually changed.
    pub fn update(&mut self, id: u64, changes: ContactUpdate) -> StoreResult<Option<Contact>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let previous = self.contacts[index].clone();
        changes.apply_to(&mut self.contacts[index]);
        self.persist_or_undo(|contacts| contacts[index] = previous)?;

        info!("Updated contact {}", id);
        Ok(Some(self.contacts[index].clone()))
    }

    /// Remove the contact with `id`. Nothing is written when it does not exist.
    pub fn delete(&mut self, id: u64) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let removed = self.contacts.remove(index);
        self.persist_or_undo(move |contacts| contacts.insert(index, removed))?;

        info!("Deleted contact {}", id);
        Ok(true)
    }

    /// Case-insensitive substring search over name, phone and email.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.contacts
            .iter()
            .filter(|c| c.matches(&needle))
            .cloned()
            .collect()
    }
}
