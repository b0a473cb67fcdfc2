use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse<'a> {
    database: &'a str,
    in_memory: bool,
}

/// Handle `lingo init`. Opening the context already applied the schema.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::info!(path = %ctx.config.database.path, "database initialized");
    output(
        &InitResponse {
            database: &ctx.config.database.path,
            in_memory: ctx.service.db().is_in_memory(),
        },
        flags.format,
    )
}
