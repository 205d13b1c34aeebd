// Datasource client
use crate::application::error::GrafanaError;
use crate::application::grafana_api::GrafanaApi;
use crate::domain::datasource::DataSource;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct DataSourceClient {
    api: Arc<dyn GrafanaApi>,
}

impl DataSourceClient {
    pub fn new(api: Arc<dyn GrafanaApi>) -> Self {
        Self { api }
    }

    /// Looks the datasource up in the current organization.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<DataSource>, GrafanaError> {
        if name.is_empty() {
            return Err(GrafanaError::invalid_argument("datasource name must not be empty"));
        }
        let path = format!("/api/datasources/name/{}", urlencoding::encode(name));
        let response = self.api.get(&path).await?;
        if response.get("id").is_none() || response.get("name").is_none() {
            tracing::debug!(%name, %response, "Datasource not found");
            return Ok(None);
        }
        serde_json::from_value(response.clone())
            .map(Some)
            .map_err(|_| GrafanaError::unexpected_response(format!("Get datasource `{name}`"), response))
    }

    /// Creates the datasource and returns it with the id Grafana assigned.
    pub async fn create(&self, datasource: &DataSource) -> Result<DataSource, GrafanaError> {
        let body = serde_json::to_value(datasource).map_err(|e| GrafanaError::Request {
            method: "POST",
            path: "/api/datasources".to_string(),
            body: None,
            source: e.into(),
        })?;
        let response = self.api.post("/api/datasources", Some(&body)).await?;
        let created = response.get("datasource");
        let id = created.and_then(|d| d.get("id")).and_then(Value::as_i64);
        let name = created.and_then(|d| d.get("name")).and_then(Value::as_str);
        match (id, name) {
            (Some(id), Some(name)) => Ok(DataSource {
                id,
                name: name.to_string(),
                ..datasource.clone()
            }),
            _ => {
                tracing::error!(%datasource, %response, "Create datasource failed");
                Err(GrafanaError::unexpected_response(
                    format!("Create datasource `{}`", datasource.name),
                    response,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grafana_api::testing::ScriptedGrafana;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_by_name_parses_existing_datasource() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({
            "id": 1,
            "orgId": 7,
            "name": "Prometheus",
            "type": "prometheus",
            "url": "http://localhost:9090",
            "access": "proxy",
            "isDefault": true
        })));
        let client = DataSourceClient::new(api.clone());

        let datasource = client.get_by_name("Prometheus").await.unwrap().unwrap();

        assert_eq!(datasource.id, 1);
        assert_eq!(datasource.url, "http://localhost:9090");
        assert_eq!(api.calls()[0].path, "/api/datasources/name/Prometheus");
    }

    #[tokio::test]
    async fn test_get_by_name_missing_datasource() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"message": "Data source not found"})));
        let client = DataSourceClient::new(api);

        assert_eq!(client.get_by_name("Prometheus").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_sends_body_without_id() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({
            "datasource": {"id": 12, "name": "Prometheus"},
            "id": 12,
            "message": "Datasource added"
        })));
        let client = DataSourceClient::new(api.clone());
        let mut datasource = DataSource::prometheus("Prometheus", "http://localhost:9090");
        datasource.id = 99;

        let created = client.create(&datasource).await.unwrap();

        assert_eq!(created.id, 12);
        assert_eq!(created.kind, "prometheus");
        assert_eq!(
            api.calls()[0].body,
            Some(json!({
                "name": "Prometheus",
                "type": "prometheus",
                "url": "http://localhost:9090",
                "access": "proxy"
            }))
        );
    }

    #[tokio::test]
    async fn test_create_without_datasource_fails() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"message": "Data source with the same name already exists"})));
        let client = DataSourceClient::new(api);

        let result = client.create(&DataSource::prometheus("Prometheus", "http://localhost:9090")).await;

        assert!(matches!(result, Err(GrafanaError::UnexpectedResponse { .. })));
    }
}
