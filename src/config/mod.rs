use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::collections::BTreeMap;
use std::env;

#[derive(Debug, Parser)]
#[command(name = "condo-proxy")]
#[command(about = "Proxy service aggregating condominium billing lookups")]
pub struct ServeOpts {
    /// Override the PORT environment variable
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content_type: String,
    pub app_token: String,
    pub access_token: String,
    pub upstream_base_url: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    pub cache_ttl_seconds: u64,
    pub cache_max_entries: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            content_type: env::var("CONTENT_TYPE")
                .unwrap_or_else(|_| "application/json".to_string()),
            app_token: env::var("APP_TOKEN").map_err(|_| LookupError::ConfigError {
                message: "APP_TOKEN environment variable is required".to_string(),
            })?,
            access_token: env::var("ACCESS_TOKEN").map_err(|_| LookupError::ConfigError {
                message: "ACCESS_TOKEN environment variable is required".to_string(),
            })?,
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "https://api.superlogica.net/v2/condor".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        })
    }

    /// Headers attached to every upstream request; also what `GET /` reports.
    pub fn outbound_headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Content-Type".to_string(), self.content_type.clone()),
            ("app_token".to_string(), self.app_token.clone()),
            ("access_token".to_string(), self.access_token.clone()),
        ])
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("upstream_base_url", &self.upstream_base_url)?;
        validation::validate_non_empty_string("content_type", &self.content_type)?;
        validation::validate_non_empty_string("app_token", &self.app_token)?;
        validation::validate_non_empty_string("access_token", &self.access_token)?;
        validation::validate_range(
            "request_timeout_seconds",
            self.request_timeout_seconds,
            1,
            300,
        )?;
        validation::validate_positive_number("cache_ttl_seconds", self.cache_ttl_seconds as usize, 1)?;
        validation::validate_positive_number(
            "cache_max_entries",
            self.cache_max_entries as usize,
            1,
        )?;

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
