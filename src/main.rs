/*!
# Moodlog - One Mood A Day

The binary wires configuration, logging and the file-backed entry store together,
then runs a single subcommand.

## Usage

```
moodlog [OPTIONS] [COMMAND]

Commands:
  today    Show today's mood and the number of recorded entries (default)
  moods    List the moods you can pick from
  add      Record today's mood, replacing any earlier one from today
  history  List all recorded entries
  delete   Delete an entry by id

Options:
  -v, --verbose              Print verbose output
      --log-format <FORMAT>  Log output format [default: text] [possible values: text, json]
```

## Configuration

- `MOODLOG_DIR`: directory holding the entries (defaults to `~/.local/share/moodlog`)
- `MOODLOG_STRICT`: fail instead of starting fresh when stored entries are corrupted
- `RUST_LOG`: overrides the log filter
*/

use moodlog::cli::CliArgs;
use moodlog::config::Config;
use moodlog::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use moodlog::errors::AppResult;
use moodlog::lock::StoreLock;
use moodlog::ops;
use moodlog::storage::{ensure_data_dir, FileBackend};
use moodlog::store::EntryStore;
use tracing::{debug, Instrument};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

fn init_tracing(args: &CliArgs) {
    let default_level = if args.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if args.log_format == LOG_FORMAT_JSON {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

async fn run(args: &CliArgs) -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    debug!(config = ?config, "Configuration loaded");

    ensure_data_dir(&config.data_dir)?;

    let store = EntryStore::new(FileBackend::new(&config.data_dir))
        .with_policy(config.corruption_policy());
    debug!(policy = ?store.policy(), "Entry store ready");

    // Held for the whole invocation so two processes never interleave a write.
    let _lock = if args.is_mutation() {
        Some(StoreLock::acquire(store.backend().dir())?)
    } else {
        None
    };

    let mut stdout = std::io::stdout().lock();
    ops::run(&store, &args.command(), &mut stdout).await
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4();
    let span = tracing::info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );

    let result = async {
        debug!(args = ?args, "Starting moodlog");
        run(&args).await
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
