//! Today's mood and the running total, as shown on the home screen.

use crate::clock::Clock;
use crate::errors::AppResult;
use crate::storage::StorageBackend;
use crate::store::EntryStore;
use std::io::Write;

pub async fn show_today<B: StorageBackend, C: Clock>(
    store: &EntryStore<B, C>,
    out: &mut impl Write,
) -> AppResult<()> {
    match store.today().await? {
        Some(entry) => {
            writeln!(out, "Today: {}", entry.mood)?;
            if !entry.note.is_empty() {
                writeln!(out, "  {}", entry.note)?;
            }
        }
        None => {
            writeln!(
                out,
                "No mood recorded today. Run `moodlog add <MOOD>` to record one."
            )?;
        }
    }

    let total = store.count().await?;
    writeln!(
        out,
        "{} {} recorded",
        total,
        if total == 1 { "entry" } else { "entries" }
    )?;
    Ok(())
}
