use crate::cli::GlobalFlags;
use crate::cli::subcommands::WordCommands;
use crate::commands::shared::page_params;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo word`.
pub async fn handle(action: &WordCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        WordCommands::List { page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(&svc.list_words(page, page_size).await?, flags.format)
        }
        WordCommands::Get { id } => output(&svc.get_word(*id).await?, flags.format),
        WordCommands::Stats { id } => {
            svc.get_word(*id).await?;
            output(&svc.get_word_stats(*id).await?, flags.format)
        }
        WordCommands::Groups { id } => {
            svc.get_word(*id).await?;
            output(&svc.get_word_groups(*id).await?, flags.format)
        }
    }
}
