use crate::utils::error::LookupError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("CPF e nome do condomínio são obrigatórios.")]
    MissingParameters,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingParameters => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ApiError::Lookup(err) => match err {
                LookupError::BuildingNotFound
                | LookupError::BuildingUnresolved
                | LookupError::UnitNotFound => {
                    (StatusCode::NOT_FOUND, json!({ "error": err.to_string() }))
                }
                LookupError::Upstream { stage, details } => {
                    tracing::error!("❌ Upstream failure at {:?}: {}", stage, details);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": err.to_string(), "details": details }),
                    )
                }
                other => {
                    tracing::error!("❌ Internal error: {}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": other.to_string() }),
                    )
                }
            },
        };

        (status, Json(body)).into_response()
    }
}
