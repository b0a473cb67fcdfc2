use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::commands::shared::page_params;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo activity`.
pub async fn handle(action: &ActivityCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ActivityCommands::Get { id } => output(&svc.get_study_activity(*id).await?, flags.format),
        ActivityCommands::Sessions { id, page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(
                &svc.list_activity_study_sessions(*id, page, page_size).await?,
                flags.format,
            )
        }
    }
}
