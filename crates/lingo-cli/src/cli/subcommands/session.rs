use clap::{Subcommand, ValueEnum};

use crate::cli::root_commands::PageArgs;

/// Outcome of a single review.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReviewResult {
    Correct,
    Wrong,
}

impl ReviewResult {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Study session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// List sessions, most recent first.
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a session by ID.
    Get { id: i64 },
    /// Distinct words reviewed in a session.
    Words {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Start a session for a group.
    Create {
        #[arg(long)]
        group: i64,
        #[arg(long)]
        activity: String,
    },
    /// Record one review of a word.
    Review {
        session_id: i64,
        word_id: i64,
        result: ReviewResult,
    },
}
