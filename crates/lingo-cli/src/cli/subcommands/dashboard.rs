use clap::Subcommand;

/// Dashboard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DashboardCommands {
    /// Summary of the most recent session.
    Last,
    /// Words studied versus words available.
    Progress,
    /// Success rate, totals, and day streak.
    Stats,
}
