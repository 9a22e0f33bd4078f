use crate::adapters::superlogica::SuperlogicaClient;
use crate::config::AppConfig;
use crate::core::cache::LookupCache;
use crate::core::pipeline::LookupPipeline;
use crate::utils::error::Result;
use std::time::Duration;

pub struct AppState {
    pub config: AppConfig,
    pub pipeline: LookupPipeline<SuperlogicaClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = SuperlogicaClient::new(&config)?;
        let cache = LookupCache::new(
            Duration::from_secs(config.cache_ttl_seconds),
            config.cache_max_entries,
        );

        Ok(Self {
            pipeline: LookupPipeline::new(client, cache),
            config,
        })
    }
}
