use crate::cli::root_commands::PageArgs;
use crate::context::AppContext;

/// Resolve `(page, page_size)` with precedence: `--page-size` -> config.
#[must_use]
pub fn page_params(args: PageArgs, ctx: &AppContext) -> (u32, u32) {
    (args.page, effective_page_size(args.page_size, ctx.default_page_size()))
}

#[must_use]
pub fn effective_page_size(local: Option<u32>, configured: u32) -> u32 {
    local.unwrap_or(configured)
}
