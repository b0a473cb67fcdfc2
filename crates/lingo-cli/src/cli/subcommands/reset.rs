use clap::Subcommand;

/// Reset commands. Both require `--yes`.
#[derive(Clone, Debug, Subcommand)]
pub enum ResetCommands {
    /// Delete all review items and sessions; keep the catalog.
    History {
        #[arg(long)]
        yes: bool,
    },
    /// Delete history, then words, groups, and memberships.
    Full {
        #[arg(long)]
        yes: bool,
    },
}
