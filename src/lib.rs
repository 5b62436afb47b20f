/*!
# Moodlog

Moodlog keeps a journal of one mood per day, with an optional note. Recording a
second mood on the same day replaces the first one.

## Core Features

- Record today's mood from a fixed catalog, with a note
- Show today's mood and the total number of entries
- List past entries with relative day labels
- Delete an entry by id

## Architecture

- `store`: the `EntryStore`, sole authority over persisted entries
- `entry`: entry types, the ordered collection and its on-disk codec
- `storage`: the key-value backends the store persists through
- `mood`: mood variants and the catalog
- `clock`: time source used to bucket entries by local day
- `ops`: one operation per CLI subcommand
- `cli`, `config`, `errors`, `lock`: the application shell

## Usage Example

```rust,no_run
use moodlog::storage::FileBackend;
use moodlog::{mood, Config, EntryStore};

#[tokio::main]
async fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let store = EntryStore::new(FileBackend::new(&config.data_dir))
        .with_policy(config.corruption_policy());
    store.upsert(mood::lookup("Heureux")?, "a good day").await?;
    println!("{} entries", store.count().await?);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Time source abstraction
pub mod clock;
/// Configuration loading and management
pub mod config;
pub mod constants;
/// Mood entries, their collection and serialization
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Relative day labels for display
pub mod labels;
/// Advisory lock guarding the data directory
pub mod lock;
/// Mood catalog
pub mod mood;
/// Operations behind each subcommand
pub mod ops;
/// Key-value storage backends
pub mod storage;
/// The entry store
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{EntryCollection, MoodEntry};
pub use errors::{AppError, AppResult};
pub use mood::MoodVariant;
pub use store::{CorruptionPolicy, EntryStore, Removal};
