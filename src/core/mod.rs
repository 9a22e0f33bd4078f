pub mod cache;
pub mod matcher;
pub mod pipeline;

pub use crate::domain::model::{BuildingMatch, LookupOutcome};
pub use crate::domain::ports::CondoApi;
pub use crate::utils::error::Result;
