use crate::domain::model::LookupOutcome;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub cpf: Option<String>,
    pub nome_condominio: Option<String>,
}

/// Diagnostic endpoint: reports the configured outbound headers.
pub async fn outbound_headers(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, String>> {
    Json(state.config.outbound_headers())
}

/// Main lookup endpoint: cpf + building name → pending charge links.
pub async fn processar_dados(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Result<Json<Value>, ApiError> {
    // an empty value counts as missing
    let cpf = params
        .cpf
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingParameters)?;
    let nome_condominio = params
        .nome_condominio
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingParameters)?;

    match state.pipeline.run(&cpf, &nome_condominio).await? {
        LookupOutcome::Links(links) => Ok(Json(json!({ "links_cobranca": links }))),
        LookupOutcome::NoPendingCharges => {
            Ok(Json(json!({ "links_cobranca": "sem cobranças pendentes" })))
        }
    }
}
