// Dashboard client
use crate::application::error::GrafanaError;
use crate::application::grafana_api::GrafanaApi;
use crate::domain::dashboard::Dashboard;
use crate::domain::variable::Variable;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardClient {
    api: Arc<dyn GrafanaApi>,
}

impl DashboardClient {
    pub fn new(api: Arc<dyn GrafanaApi>) -> Self {
        Self { api }
    }

    /// Creates the dashboard, inside `folder_id` when given. Existing dashboards are never overwritten.
    pub async fn create(&self, dashboard: &Dashboard, folder_id: Option<i64>) -> Result<(), GrafanaError> {
        tracing::debug!(
            title = %dashboard.title,
            panels = dashboard.panels.len(),
            variables = ?dashboard.variables.iter().map(Variable::name).collect::<Vec<_>>(),
            "Creating dashboard"
        );
        let mut body = json!({
            "dashboard": dashboard,
            "overwrite": false,
        });
        if let Some(folder_id) = folder_id {
            body["folderId"] = json!(folder_id);
        }
        let response = self.api.post("/api/dashboards/db", Some(&body)).await?;
        if response.get("id").and_then(Value::as_i64).is_some() {
            return Ok(());
        }
        tracing::error!(title = %dashboard.title, ?folder_id, %response, "Create dashboard failed");
        Err(GrafanaError::unexpected_response(
            format!("Create dashboard `{}`", dashboard.title),
            response,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grafana_api::testing::ScriptedGrafana;

    #[tokio::test]
    async fn test_create_in_folder() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"id": 11, "status": "success"})));
        let client = DashboardClient::new(api.clone());

        client.create(&Dashboard::new("Memory"), Some(3)).await.unwrap();

        let body = api.calls()[0].body.clone().unwrap();
        assert_eq!(body["folderId"], json!(3));
        assert_eq!(body["overwrite"], json!(false));
        assert_eq!(body["dashboard"]["title"], json!("Memory"));
        assert_eq!(body["dashboard"]["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_without_folder_omits_folder_id() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"id": 11})));
        let client = DashboardClient::new(api.clone());

        client.create(&Dashboard::new("Memory"), None).await.unwrap();

        let body = api.calls()[0].body.clone().unwrap();
        assert!(body.get("folderId").is_none());
    }

    #[tokio::test]
    async fn test_create_without_id_fails() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"message": "A dashboard with the same name already exists", "status": "name-exists"})));
        let client = DashboardClient::new(api);

        let error = client.create(&Dashboard::new("Memory"), Some(3)).await.unwrap_err();

        assert!(error.to_string().starts_with("Create dashboard `Memory` failed"));
    }
}
