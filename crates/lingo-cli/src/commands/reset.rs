use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResetCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo reset`.
pub async fn handle(action: &ResetCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (yes, label) = match action {
        ResetCommands::History { yes } => (*yes, "history"),
        ResetCommands::Full { yes } => (*yes, "full"),
    };
    if !yes {
        bail!("refusing to run the {label} reset without --yes");
    }

    let summary = match action {
        ResetCommands::History { .. } => ctx.service.reset_history().await?,
        ResetCommands::Full { .. } => ctx.service.full_reset().await?,
    };
    output(&summary, flags.format)
}
