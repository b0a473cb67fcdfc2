use clap::Subcommand;

use crate::cli::root_commands::PageArgs;

/// Group commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// List groups with word counts.
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a group by ID.
    Get { id: i64 },
    /// Words in a group.
    Words {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Study sessions for a group.
    Sessions {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
}
