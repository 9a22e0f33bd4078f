use crate::core::cache::{self, LookupCache};
use crate::core::matcher::{self, MATCH_THRESHOLD};
use crate::domain::model::{BuildingMatch, LookupOutcome};
use crate::domain::ports::CondoApi;
use crate::utils::error::{LookupError, Result};
use std::sync::Arc;

/// Three-step lookup: building name → building id → unit id → pending charges.
///
/// Each step memoizes by its exact inputs and any stage failure
/// short-circuits the run.
pub struct LookupPipeline<A: CondoApi> {
    api: A,
    cache: LookupCache,
}

impl<A: CondoApi> LookupPipeline<A> {
    pub fn new(api: A, cache: LookupCache) -> Self {
        Self { api, cache }
    }

    /// Fuzzy-resolves a building name against the cached upstream list.
    pub async fn resolve_building(&self, name: &str) -> Result<BuildingMatch> {
        let buildings = self
            .cache
            .buildings
            .try_get_with((), async {
                tracing::debug!("📡 Fetching building list from upstream");
                self.api.list_buildings().await.map(Arc::new)
            })
            .await
            .map_err(cache::unshare)?;

        let (building, score) =
            matcher::best_match(name, &buildings).ok_or(LookupError::BuildingNotFound)?;

        if score < MATCH_THRESHOLD {
            tracing::info!(
                "🔎 No building close enough to '{}' (best score {})",
                name,
                score
            );
            return Err(LookupError::BuildingNotFound);
        }

        let id = building.id.clone().ok_or(LookupError::BuildingUnresolved)?;
        tracing::info!("🔎 Matched '{}' to '{}' (score {})", name, building.name, score);

        Ok(BuildingMatch {
            id,
            name: building.name.clone(),
            score,
        })
    }

    /// First unit matching the taxpayer id within the building, if any.
    /// Absence is a terminal state, not an error; it is memoized as well.
    pub async fn resolve_unit(&self, taxpayer_id: &str, building_id: &str) -> Result<Option<String>> {
        let key = (taxpayer_id.to_string(), building_id.to_string());
        self.cache
            .units
            .try_get_with(key, async {
                tracing::debug!("📡 Searching units in building {}", building_id);
                let units = self.api.search_units(building_id, taxpayer_id).await?;
                Ok(units.into_iter().next().and_then(|unit| unit.id))
            })
            .await
            .map_err(cache::unshare)
    }

    /// Payment links of the unit's pending charges; may be empty.
    pub async fn resolve_charges(&self, building_id: &str, unit_id: &str) -> Result<Arc<Vec<String>>> {
        let key = (building_id.to_string(), unit_id.to_string());
        self.cache
            .charges
            .try_get_with(key, async {
                tracing::debug!("📡 Fetching pending charges for unit {}", unit_id);
                let charges = self.api.pending_charges(building_id, unit_id).await?;
                let links: Vec<String> = charges
                    .into_iter()
                    .filter_map(|charge| charge.payment_link)
                    .collect();
                Ok(Arc::new(links))
            })
            .await
            .map_err(cache::unshare)
    }

    /// Runs the full lookup for one request.
    pub async fn run(&self, taxpayer_id: &str, building_name: &str) -> Result<LookupOutcome> {
        let building = self.resolve_building(building_name).await?;

        let unit_id = match self.resolve_unit(taxpayer_id, &building.id).await? {
            Some(id) => id,
            None => return Err(LookupError::UnitNotFound),
        };

        let links = self.resolve_charges(&building.id, &unit_id).await?;
        if links.is_empty() {
            tracing::info!("✅ Unit {} has no pending charges", unit_id);
            return Ok(LookupOutcome::NoPendingCharges);
        }

        tracing::info!(
            "✅ Found {} pending charge link(s) for unit {}",
            links.len(),
            unit_id
        );
        Ok(LookupOutcome::Links(links.as_ref().clone()))
    }
}
