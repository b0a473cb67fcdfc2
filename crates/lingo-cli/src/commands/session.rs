use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::commands::shared::page_params;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreatedSessionResponse {
    id: i64,
    group_id: i64,
}

/// Handle `lingo session`.
pub async fn handle(action: &SessionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        SessionCommands::List { page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(&svc.list_study_sessions(page, page_size).await?, flags.format)
        }
        SessionCommands::Get { id } => output(&svc.get_study_session(*id).await?, flags.format),
        SessionCommands::Words { id, page } => {
            let (page, page_size) = page_params(*page, ctx);
            output(
                &svc.list_study_session_words(*id, page, page_size).await?,
                flags.format,
            )
        }
        SessionCommands::Create { group, activity } => {
            let id = svc.create_study_activity(*group, activity).await?;
            output(
                &CreatedSessionResponse {
                    id,
                    group_id: *group,
                },
                flags.format,
            )
        }
        SessionCommands::Review {
            session_id,
            word_id,
            result,
        } => output(
            &svc.review_word(*session_id, *word_id, result.is_correct())
                .await?,
            flags.format,
        ),
    }
}
