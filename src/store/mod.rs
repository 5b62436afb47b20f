//! The entry store: the single authority over persisted mood entries.
//!
//! Every operation reads the whole collection from the backend; mutations write the
//! whole collection back. Nothing is cached between calls, so a read issued after a
//! mutation always observes it.
//!
//! Mutations (`upsert`, `delete`) run their read-modify-write sequence behind one
//! async gate. Without it, two overlapping mutations could both read the same
//! collection and the second write would silently discard the first. Reads take no
//! gate.

use crate::clock::{Clock, SystemClock};
use crate::constants::{CORRUPT_BACKUP_SUFFIX, ENTRIES_STORAGE_KEY};
use crate::entry::{codec, EntryCollection, MoodEntry, UpsertOutcome};
use crate::errors::{AppResult, StorageError};
use crate::mood::MoodVariant;
use crate::storage::StorageBackend;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What to do when the stored blob exists but cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptionPolicy {
    /// Log a warning and behave as if nothing was stored. The unreadable blob is
    /// copied to `<key>.corrupt` before the next mutation overwrites it.
    #[default]
    TreatAsEmpty,
    /// Surface `StorageError::Corrupted` from every operation.
    Fail,
}

struct Loaded {
    entries: EntryCollection,
    /// Raw blob that failed to decode and was replaced by an empty collection.
    corrupt_raw: Option<String>,
}

/// Result of `EntryStore::remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The collection after the removal.
    pub remaining: EntryCollection,
    /// How many entries carried the id; zero when nothing matched.
    pub removed: usize,
}

/// Reads, upserts and deletes mood entries stored under a single key.
///
/// # Examples
///
/// ```
/// use moodlog::clock::FixedClock;
/// use moodlog::mood;
/// use moodlog::storage::MemoryBackend;
/// use moodlog::store::EntryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let clock = FixedClock::at(2024, 1, 15, 9, 0).unwrap();
/// let store = EntryStore::with_clock(MemoryBackend::new(), clock);
///
/// store.upsert(mood::lookup("Heureux").unwrap(), "first").await.unwrap();
/// let latest = store.upsert(mood::lookup("Pensif").unwrap(), " second ").await.unwrap();
///
/// let entries = store.list_all().await.unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries.as_slice()[0], latest);
/// assert_eq!(latest.note, "second");
/// # });
/// ```
pub struct EntryStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    key: String,
    policy: CorruptionPolicy,
    write_gate: Mutex<()>,
}

impl<B: StorageBackend> EntryStore<B, SystemClock> {
    /// A store on `backend` using the wall clock and the default storage key.
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> EntryStore<B, C> {
    pub fn with_clock(backend: B, clock: C) -> Self {
        EntryStore {
            backend,
            clock,
            key: ENTRIES_STORAGE_KEY.to_string(),
            policy: CorruptionPolicy::default(),
            write_gate: Mutex::new(()),
        }
    }

    /// Stores the collection under `key` instead of the default key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_policy(mut self, policy: CorruptionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn policy(&self) -> CorruptionPolicy {
        self.policy
    }

    /// Key a corrupted blob is preserved under before being overwritten.
    pub fn backup_key(&self) -> String {
        format!("{}{}", self.key, CORRUPT_BACKUP_SUFFIX)
    }

    /// All entries in stored order.
    ///
    /// An absent key yields an empty collection. Under the default policy, so does
    /// a corrupted one; callers cannot tell the two apart through this call.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the backend read fails, if the stored schema
    /// is newer than this build, or if the blob is corrupted under
    /// `CorruptionPolicy::Fail`.
    pub async fn list_all(&self) -> AppResult<EntryCollection> {
        Ok(self.load().await?.entries)
    }

    /// The entry recorded on the given local calendar day, if any.
    pub async fn find_for_day(&self, day: NaiveDate) -> AppResult<Option<MoodEntry>> {
        let entries = self.list_all().await?;
        Ok(entries.find_for_day(day).cloned())
    }

    /// The entry for the clock's current day, if any.
    pub async fn today(&self) -> AppResult<Option<MoodEntry>> {
        self.find_for_day(self.clock.today()).await
    }

    /// Number of stored entries.
    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.list_all().await?.len())
    }

    /// Records `mood` and `note` for today.
    ///
    /// If today already has an entry it is replaced at its current position,
    /// including its id. Otherwise the new entry is inserted at the front. The note
    /// is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if reading or writing the backend fails. The
    /// caller must then assume nothing changed.
    pub async fn upsert(&self, mood: MoodVariant, note: &str) -> AppResult<MoodEntry> {
        let _gate = self.write_gate.lock().await;

        let entry = MoodEntry::new(mood, note, self.clock.now());
        let mut loaded = self.load().await?;
        let outcome = loaded.entries.upsert(entry.clone());
        self.save(&loaded).await?;

        match outcome {
            UpsertOutcome::Inserted => info!(
                id = %entry.id,
                day = %entry.day(),
                mood = %entry.mood.name,
                "Recorded new mood entry"
            ),
            UpsertOutcome::Replaced { index, previous_id } => info!(
                id = %entry.id,
                day = %entry.day(),
                mood = %entry.mood.name,
                index,
                previous_id = %previous_id,
                "Replaced mood entry for the day"
            ),
        }
        Ok(entry)
    }

    /// Removes the entry with `id` and returns the remaining collection.
    ///
    /// Deleting an id that does not exist is not an error and leaves the stored
    /// data untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if reading or writing the backend fails.
    pub async fn delete(&self, id: &str) -> AppResult<EntryCollection> {
        Ok(self.remove(id).await?.remaining)
    }

    /// Like `delete`, but also reports how many entries were removed.
    pub async fn remove(&self, id: &str) -> AppResult<Removal> {
        let _gate = self.write_gate.lock().await;

        let mut loaded = self.load().await?;
        let removed = loaded.entries.remove_by_id(id);
        if removed == 0 {
            debug!(id, "No entry to delete");
            return Ok(Removal {
                remaining: loaded.entries,
                removed,
            });
        }

        self.save(&loaded).await?;
        info!(id, remaining = loaded.entries.len(), "Deleted mood entry");
        Ok(Removal {
            remaining: loaded.entries,
            removed,
        })
    }

    async fn load(&self) -> AppResult<Loaded> {
        let Some(raw) = self.backend.get(&self.key).await? else {
            debug!(key = %self.key, "No stored entries yet");
            return Ok(Loaded {
                entries: EntryCollection::new(),
                corrupt_raw: None,
            });
        };

        match codec::decode(&self.key, &raw) {
            Ok(entries) => {
                debug!(key = %self.key, count = entries.len(), "Loaded entries");
                Ok(Loaded {
                    entries,
                    corrupt_raw: None,
                })
            }
            Err(StorageError::Corrupted { key, source })
                if self.policy == CorruptionPolicy::TreatAsEmpty =>
            {
                warn!(key = %key, error = %source, "Stored entries are corrupted; treating as empty");
                Ok(Loaded {
                    entries: EntryCollection::new(),
                    corrupt_raw: Some(raw),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, loaded: &Loaded) -> AppResult<()> {
        if let Some(raw) = &loaded.corrupt_raw {
            let backup_key = self.backup_key();
            self.backend.set(&backup_key, raw).await?;
            warn!(key = %self.key, backup_key = %backup_key, "Preserved corrupted entries before overwriting");
        }

        let encoded = codec::encode(&self.key, &loaded.entries)?;
        self.backend.set(&self.key, &encoded).await?;
        Ok(())
    }
}
