use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::{Parser, Subcommand};

/// Record one mood a day, with an optional note
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show today's mood and the number of recorded entries (default)
    Today,

    /// List the moods you can pick from
    Moods,

    /// Record today's mood, replacing any earlier one from today
    Add {
        /// Mood name or its position in `moodlog moods`
        mood: String,

        /// What happened today
        #[clap(short = 'n', long, default_value = "")]
        note: String,
    },

    /// List all recorded entries
    History,

    /// Delete an entry by id
    Delete {
        /// Entry id as shown by `moodlog history`
        id: String,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// The subcommand to run, defaulting to `today`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Today)
    }

    /// Whether the command writes to the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.command,
            Some(Command::Add { .. }) | Some(Command::Delete { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["moodlog"]);
        assert!(args.command.is_none());
        assert_eq!(args.command(), Command::Today);
        assert!(!args.verbose);
        assert_eq!(args.log_format, LOG_FORMAT_TEXT);
        assert!(!args.is_mutation());
    }

    #[test]
    fn test_add_with_note() {
        let args = CliArgs::parse_from(vec!["moodlog", "add", "Pensif", "--note", "long day"]);
        assert_eq!(
            args.command(),
            Command::Add {
                mood: "Pensif".to_string(),
                note: "long day".to_string()
            }
        );
        assert!(args.is_mutation());

        // Short form, note defaults to empty
        let args = CliArgs::parse_from(vec!["moodlog", "add", "2"]);
        assert_eq!(
            args.command(),
            Command::Add {
                mood: "2".to_string(),
                note: String::new()
            }
        );

        let args = CliArgs::parse_from(vec!["moodlog", "add", "1", "-n", "ok"]);
        assert!(matches!(args.command(), Command::Add { note, .. } if note == "ok"));
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(CliArgs::try_parse_from(vec!["moodlog", "delete"]).is_err());

        let args = CliArgs::parse_from(vec!["moodlog", "delete", "abc"]);
        assert_eq!(
            args.command(),
            Command::Delete {
                id: "abc".to_string()
            }
        );
        assert!(args.is_mutation());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(vec!["moodlog", "history", "-v", "--log-format", "json"]);
        assert_eq!(args.command(), Command::History);
        assert!(args.verbose);
        assert_eq!(args.log_format, LOG_FORMAT_JSON);
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        assert!(CliArgs::try_parse_from(vec!["moodlog", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_moods_subcommand() {
        let args = CliArgs::parse_from(vec!["moodlog", "moods"]);
        assert_eq!(args.command(), Command::Moods);
        assert!(!args.is_mutation());
    }
}
