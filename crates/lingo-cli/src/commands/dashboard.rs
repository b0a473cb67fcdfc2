use crate::cli::GlobalFlags;
use crate::cli::subcommands::DashboardCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo dashboard`.
pub async fn handle(action: &DashboardCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        DashboardCommands::Last => output(&svc.last_study_session().await?, flags.format),
        DashboardCommands::Progress => output(&svc.study_progress().await?, flags.format),
        DashboardCommands::Stats => output(&svc.quick_stats().await?, flags.format),
    }
}
