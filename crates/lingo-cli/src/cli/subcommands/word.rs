use clap::Subcommand;

use crate::cli::root_commands::PageArgs;

/// Word commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WordCommands {
    /// List words.
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a word by ID.
    Get { id: i64 },
    /// Correct and wrong review totals for a word.
    Stats { id: i64 },
    /// Groups a word belongs to.
    Groups { id: i64 },
}
