use clap::Subcommand;

use crate::cli::root_commands::PageArgs;

/// Study activity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActivityCommands {
    /// Get a study activity by ID.
    Get { id: i64 },
    /// Sessions launched by an activity.
    Sessions {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
}
