// Folder client
use crate::application::error::GrafanaError;
use crate::application::grafana_api::GrafanaApi;
use crate::domain::folder::Folder;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct FolderClient {
    api: Arc<dyn GrafanaApi>,
}

impl FolderClient {
    pub fn new(api: Arc<dyn GrafanaApi>) -> Self {
        Self { api }
    }

    /// Always creates a new folder, even when one with the same title exists.
    pub async fn create(&self, title: &str) -> Result<Folder, GrafanaError> {
        if title.is_empty() {
            return Err(GrafanaError::invalid_argument("folder title must not be empty"));
        }
        let body = json!({ "title": title });
        let response = self.api.post("/api/folders", Some(&body)).await?;
        match response.get("id").and_then(Value::as_i64) {
            Some(id) => Ok(Folder::new(id, title)),
            None => {
                tracing::error!(%title, %response, "Create folder failed");
                Err(GrafanaError::unexpected_response(
                    format!("Create folder `{title}`"),
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

    #[tokio::test]
    async fn test_create_folder() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"id": 3, "uid": "nErXDvCkzz", "title": "hotspot"})));
        let client = FolderClient::new(api.clone());

        let folder = client.create("hotspot").await.unwrap();

        assert_eq!(folder, Folder::new(3, "hotspot"));
        assert_eq!(api.calls()[0].body, Some(json!({"title": "hotspot"})));
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected() {
        let api = Arc::new(ScriptedGrafana::new());
        let client = FolderClient::new(api.clone());

        assert!(matches!(client.create("").await, Err(GrafanaError::InvalidArgument(_))));
        assert!(api.calls().is_empty());
    }
}
