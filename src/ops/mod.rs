//! High-level operations behind each CLI subcommand.
//!
//! Every operation talks to the entry store only and renders its result to a
//! writer, so the same code serves the binary and the tests.

pub mod delete;
pub mod history;
pub mod moods;
pub mod record;
pub mod today;

pub use delete::delete_entry;
pub use history::show_history;
pub use moods::list_moods;
pub use record::record_mood;
pub use today::show_today;

use crate::cli::Command;
use crate::clock::Clock;
use crate::errors::AppResult;
use crate::storage::StorageBackend;
use crate::store::EntryStore;
use std::io::Write;

/// Runs `command` against `store`, writing user-facing output to `out`.
pub async fn run<B: StorageBackend, C: Clock>(
    store: &EntryStore<B, C>,
    command: &Command,
    out: &mut impl Write,
) -> AppResult<()> {
    match command {
        Command::Today => show_today(store, out).await,
        Command::Moods => list_moods(out),
        Command::Add { mood, note } => record_mood(store, mood, note, out).await,
        Command::History => show_history(store, out).await,
        Command::Delete { id } => delete_entry(store, id, out).await,
    }
}
