//! List past entries, as shown on the history screen.

use crate::clock::Clock;
use crate::constants::{ENTRY_TIME_FORMAT, NO_NOTE_PLACEHOLDER};
use crate::errors::AppResult;
use crate::labels::DayLabel;
use crate::storage::StorageBackend;
use crate::store::EntryStore;
use chrono::Local;
use std::io::Write;

/// Prints every entry in stored order with a relative day label.
pub async fn show_history<B: StorageBackend, C: Clock>(
    store: &EntryStore<B, C>,
    out: &mut impl Write,
) -> AppResult<()> {
    let entries = store.list_all().await?;
    if entries.is_empty() {
        writeln!(out, "No entries yet.")?;
        return Ok(());
    }

    let today = store.clock().today();
    for entry in &entries {
        let label = DayLabel::for_day(entry.day(), today);
        let time = entry.date.with_timezone(&Local).format(ENTRY_TIME_FORMAT);

        writeln!(out, "{} {}  {}", label, time, entry.mood)?;
        if entry.note.is_empty() {
            writeln!(out, "    {}", NO_NOTE_PLACEHOLDER)?;
        } else {
            writeln!(out, "    {}", entry.note)?;
        }
        writeln!(out, "    id: {}", entry.id)?;
    }
    Ok(())
}
