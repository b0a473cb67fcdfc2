use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ActivityCommands, DashboardCommands, GroupCommands, ResetCommands, SessionCommands,
    WordCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database (if needed) and apply the schema.
    Init,
    /// Load groups and words from JSON seed files.
    Seed(SeedArgs),
    /// Vocabulary words.
    Word {
        #[command(subcommand)]
        action: WordCommands,
    },
    /// Word groups.
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Study sessions and reviews.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Study activities.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Dashboard aggregates.
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },
    /// Delete study history or everything.
    Reset {
        #[command(subcommand)]
        action: ResetCommands,
    },
}

/// Arguments for `lingo seed`.
#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seed files, each holding one group and its words.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Pagination flags shared by list commands.
#[derive(Clone, Copy, Debug, Args)]
pub struct PageArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Items per page (defaults to `general.page_size`).
    #[arg(long)]
    pub page_size: Option<u32>,
}
