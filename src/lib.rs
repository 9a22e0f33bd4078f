pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::superlogica::SuperlogicaClient;
pub use crate::config::{AppConfig, ServeOpts};
pub use crate::core::cache::LookupCache;
pub use crate::core::pipeline::LookupPipeline;
pub use crate::domain::model::LookupOutcome;
pub use crate::utils::error::{LookupError, Result};
