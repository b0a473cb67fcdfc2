use anyhow::Context;
use lingo_config::LingoConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LingoConfig> {
    let mut config = LingoConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    tracing::debug!(path = %config.database.path, page_size = config.general.page_size, "configuration loaded");
    Ok(config)
}

fn apply_overrides(config: &mut LingoConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}
