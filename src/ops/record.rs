//! Record today's mood.

use crate::clock::Clock;
use crate::errors::AppResult;
use crate::mood;
use crate::storage::StorageBackend;
use crate::store::EntryStore;
use std::io::Write;

/// Resolves `selection` against the catalog and upserts it for today.
///
/// # Errors
///
/// Returns `AppError::Mood` for an unknown selection (nothing is written), or
/// `AppError::Storage` if persisting fails.
pub async fn record_mood<B: StorageBackend, C: Clock>(
    store: &EntryStore<B, C>,
    selection: &str,
    note: &str,
    out: &mut impl Write,
) -> AppResult<()> {
    let mood = mood::lookup(selection)?;
    let entry = store.upsert(mood, note).await?;

    writeln!(out, "Saved {} for today.", entry.mood)?;
    writeln!(out, "id: {}", entry.id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::errors::AppError;
    use crate::storage::MemoryBackend;

    fn store() -> EntryStore<MemoryBackend, FixedClock> {
        EntryStore::with_clock(MemoryBackend::new(), FixedClock::at(2024, 1, 15, 8, 0).unwrap())
    }

    #[tokio::test]
    async fn test_records_and_reports_id() {
        let store = store();
        let mut out = Vec::new();
        record_mood(&store, "excite", "  party ", &mut out)
            .await
            .unwrap();

        let saved = store.today().await.unwrap().unwrap();
        assert_eq!(saved.mood.name, "Excite");
        assert_eq!(saved.note, "party");

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Saved 🥳 Excite for today."));
        assert!(text.contains(&saved.id));
    }

    #[tokio::test]
    async fn test_unknown_mood_writes_nothing() {
        let store = store();
        let mut out = Vec::new();

        let result = record_mood(&store, "grumpy", "", &mut out).await;
        assert!(matches!(result, Err(AppError::Mood(_))));
        assert!(out.is_empty());
        assert!(store.backend().raw(store.key()).is_none());
    }
}
