use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupCommands;
use crate::commands::shared::page_params;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo group`.
pub async fn handle(action: &GroupCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        GroupCommands::List { page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(&svc.list_groups(page, page_size).await?, flags.format)
        }
        GroupCommands::Get { id } => output(&svc.get_group(*id).await?, flags.format),
        GroupCommands::Words { id, page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(&svc.list_group_words(*id, page, page_size).await?, flags.format)
        }
        GroupCommands::Sessions { id, page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(
                &svc.list_group_study_sessions(*id, page, page_size).await?,
                flags.format,
            )
        }
    }
}
