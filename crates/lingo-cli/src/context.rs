use lingo_config::LingoConfig;
use lingo_db::service::LingoService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LingoService,
    pub config: LingoConfig,
}

impl AppContext {
    /// Open (and migrate) the configured store.
    pub async fn init(config: LingoConfig) -> anyhow::Result<Self> {
        let service = LingoService::from_config(&config.database).await?;
        Ok(Self { service, config })
    }

    /// Page size used when a command does not pass `--page-size`.
    pub const fn default_page_size(&self) -> u32 {
        self.config.general.page_size
    }
}
