//! Delete an entry by id.

use crate::clock::Clock;
use crate::errors::AppResult;
use crate::storage::StorageBackend;
use crate::store::EntryStore;
use std::io::Write;

/// Deletes the entry with `id`. An unknown id is reported, not treated as an error.
pub async fn delete_entry<B: StorageBackend, C: Clock>(
    store: &EntryStore<B, C>,
    id: &str,
    out: &mut impl Write,
) -> AppResult<()> {
    let removal = store.remove(id).await?;

    if removal.removed > 0 {
        writeln!(
            out,
            "Deleted entry {}. {} remaining.",
            id,
            removal.remaining.len()
        )?;
    } else {
        writeln!(out, "No entry with id {}.", id)?;
    }
    Ok(())
}
