//! Mood entries and the ordered collection they are stored in.
//!
//! The collection enforces the one-entry-per-local-day rule: a new day goes to the
//! front, while an entry for a day that already exists replaces it at the same
//! position.

pub mod codec;

use crate::clock::day_of;
use crate::mood::MoodVariant;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One recorded mood for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub mood: MoodVariant,
    #[serde(default)]
    pub note: String,
    pub date: DateTime<Utc>,
}

impl MoodEntry {
    /// Creates an entry stamped with `now`, a fresh id, and the note trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Local;
    /// use moodlog::entry::MoodEntry;
    /// use moodlog::mood;
    ///
    /// let entry = MoodEntry::new(mood::lookup("Pensif").unwrap(), "  hello  ", Local::now());
    /// assert_eq!(entry.note, "hello");
    /// ```
    pub fn new(mood: MoodVariant, note: &str, now: DateTime<Local>) -> Self {
        MoodEntry {
            id: uuid::Uuid::new_v4().to_string(),
            mood,
            note: note.trim().to_string(),
            date: now.with_timezone(&Utc),
        }
    }

    /// The local calendar day this entry belongs to.
    pub fn day(&self) -> NaiveDate {
        day_of(&self.date)
    }
}

/// What `EntryCollection::upsert` did with the entry it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry existed for the day; the new one now sits at the front.
    Inserted,
    /// The day's entry at `index` was overwritten in place.
    Replaced { index: usize, previous_id: String },
}

/// Entries in display order, most recent day first for newly created days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<MoodEntry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoodEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Index of the first entry that falls on `day`.
    pub fn position_for_day(&self, day: NaiveDate) -> Option<usize> {
        self.entries.iter().position(|entry| entry.day() == day)
    }

    pub fn find_for_day(&self, day: NaiveDate) -> Option<&MoodEntry> {
        self.position_for_day(day).map(|index| &self.entries[index])
    }

    pub fn find_by_id(&self, id: &str) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Inserts `entry` at the front, or replaces the entry of the same day in place.
    pub fn upsert(&mut self, entry: MoodEntry) -> UpsertOutcome {
        match self.position_for_day(entry.day()) {
            Some(index) => {
                let previous = std::mem::replace(&mut self.entries[index], entry);
                UpsertOutcome::Replaced {
                    index,
                    previous_id: previous.id,
                }
            }
            None => {
                self.entries.insert(0, entry);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Removes every entry carrying `id`; returns how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before - self.entries.len()
    }
}

impl From<Vec<MoodEntry>> for EntryCollection {
    fn from(entries: Vec<MoodEntry>) -> Self {
        EntryCollection { entries }
    }
}

impl IntoIterator for EntryCollection {
    type Item = MoodEntry;
    type IntoIter = std::vec::IntoIter<MoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a MoodEntry;
    type IntoIter = std::slice::Iter<'a, MoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
