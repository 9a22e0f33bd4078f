//! reqwest-backed client for the Superlogica condominium API.
//!
//! Three fixed GET endpoints, authenticated by static headers configured at
//! startup. Transport failures and non-2xx responses are converted into
//! stage-tagged errors at the call site; nothing is retried.

use crate::config::AppConfig;
use crate::domain::model::{Building, Charge, Unit};
use crate::domain::ports::CondoApi;
use crate::utils::error::{LookupError, Result, Stage};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SuperlogicaClient {
    client: Client,
    base_url: String,
}

impl SuperlogicaClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(build_headers(config)?)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| LookupError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T>(&self, stage: Stage, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("📡 GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| LookupError::upstream(stage, e))?;

        tracing::debug!("📡 {} responded {}", path, response.status());

        response
            .error_for_status()
            .map_err(|e| LookupError::upstream(stage, e))?
            .json()
            .await
            .map_err(|e| LookupError::upstream(stage, e))
    }
}

fn build_headers(config: &AppConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in config.outbound_headers() {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            LookupError::InvalidConfigValueError {
                field: name.clone(),
                value: value.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let value = HeaderValue::from_str(&value).map_err(|e| {
            LookupError::InvalidConfigValueError {
                field: name.to_string(),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            }
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait]
impl CondoApi for SuperlogicaClient {
    async fn list_buildings(&self) -> Result<Vec<Building>> {
        self.get_json(
            Stage::Buildings,
            "/condominios/get",
            &[("id", "-1"), ("somenteCondominiosAtivos", "1")],
        )
        .await
    }

    async fn search_units(&self, building_id: &str, search: &str) -> Result<Vec<Unit>> {
        self.get_json(
            Stage::Units,
            "/unidades/index",
            &[("idCondominio", building_id), ("pesquisa", search)],
        )
        .await
    }

    async fn pending_charges(&self, building_id: &str, unit_id: &str) -> Result<Vec<Charge>> {
        self.get_json(
            Stage::Charges,
            "/cobranca/index",
            &[
                ("status", "pendentes"),
                ("idCondominio", building_id),
                ("UNIDADES[0]", unit_id),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_config(base_url: String) -> AppConfig {
        AppConfig {
            content_type: "application/json".to_string(),
            app_token: "test-app-token".to_string(),
            access_token: "test-access-token".to_string(),
            upstream_base_url: base_url,
            port: 5000,
            request_timeout_seconds: 5,
            cache_ttl_seconds: 300,
            cache_max_entries: 100,
        }
    }

    #[tokio::test]
    async fn test_list_buildings_sends_auth_headers_and_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/condominios/get")
                .query_param("id", "-1")
                .query_param("somenteCondominiosAtivos", "1")
                .header("app_token", "test-app-token")
                .header("access_token", "test-access-token");
            then.status(200).json_body(serde_json::json!([
                {"id_condominio_cond": "1", "st_fantasia_cond": "Edifício Sol"},
                {"id_condominio_cond": "2", "st_fantasia_cond": "Residencial Lua"}
            ]));
        });

        let client = SuperlogicaClient::new(&test_config(server.base_url())).unwrap();
        let buildings = client.list_buildings().await.unwrap();

        mock.assert();
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].id.as_deref(), Some("1"));
        assert_eq!(buildings[0].name, "Edifício Sol");
    }

    #[tokio::test]
    async fn test_numeric_ids_decode_as_strings() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/condominios/get");
            then.status(200).json_body(serde_json::json!([
                {"id_condominio_cond": 1, "st_fantasia_cond": "Edifício Sol"}
            ]));
        });

        let client = SuperlogicaClient::new(&test_config(server.base_url())).unwrap();
        let buildings = client.list_buildings().await.unwrap();

        assert_eq!(buildings[0].id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_search_units_query_shape() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/unidades/index")
                .query_param("idCondominio", "1")
                .query_param("pesquisa", "12345678900");
            then.status(200)
                .json_body(serde_json::json!([{"id_unidade_uni": "42"}]));
        });

        let client = SuperlogicaClient::new(&test_config(server.base_url())).unwrap();
        let units = client.search_units("1", "12345678900").await.unwrap();

        mock.assert();
        assert_eq!(units[0].id.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_pending_charges_query_shape() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/cobranca/index")
                .query_param("status", "pendentes")
                .query_param("idCondominio", "1")
                .query_param("UNIDADES[0]", "42");
            then.status(200).json_body(serde_json::json!([
                {"link_segundavia": "http://pay/1"},
                {"outro_campo": "ignorado"}
            ]));
        });

        let client = SuperlogicaClient::new(&test_config(server.base_url())).unwrap();
        let charges = client.pending_charges("1", "42").await.unwrap();

        mock.assert();
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0].payment_link.as_deref(), Some("http://pay/1"));
        assert!(charges[1].payment_link.is_none());
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_stage_tagged_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/cobranca/index");
            then.status(503);
        });

        let client = SuperlogicaClient::new(&test_config(server.base_url())).unwrap();
        let err = client.pending_charges("1", "42").await.unwrap_err();

        match err {
            LookupError::Upstream { stage, details } => {
                assert_eq!(stage, Stage::Charges);
                assert!(!details.is_empty());
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_stage_tagged_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/unidades/index");
            then.status(200).body("not json");
        });

        let client = SuperlogicaClient::new(&test_config(server.base_url())).unwrap();
        let err = client.search_units("1", "12345678900").await.unwrap_err();

        assert!(matches!(
            err,
            LookupError::Upstream {
                stage: Stage::Units,
                ..
            }
        ));
    }
}
