use serde::{Deserialize, Deserializer, Serialize};

/// Upstream ids arrive as JSON strings from the live API but as bare numbers
/// in some tenants; both map to the same opaque identifier.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    #[serde(rename = "id_condominio_cond", default, deserialize_with = "lenient_id")]
    pub id: Option<String>,

    #[serde(rename = "st_fantasia_cond", default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "id_unidade_uni", default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    #[serde(rename = "link_segundavia", default)]
    pub payment_link: Option<String>,
}

/// Winning building after fuzzy name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingMatch {
    pub id: String,
    pub name: String,
    pub score: u32,
}

/// Terminal result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Links(Vec<String>),
    NoPendingCharges,
}
