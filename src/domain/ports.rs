use crate::domain::model::{Building, Charge, Unit};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the upstream property-management API.
#[async_trait]
pub trait CondoApi: Send + Sync {
    async fn list_buildings(&self) -> Result<Vec<Building>>;
    async fn search_units(&self, building_id: &str, search: &str) -> Result<Vec<Unit>>;
    async fn pending_charges(&self, building_id: &str, unit_id: &str) -> Result<Vec<Charge>>;
}
