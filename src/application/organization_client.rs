// Organization client - lookup, creation and session switching
use crate::application::error::GrafanaError;
use crate::application::grafana_api::GrafanaApi;
use crate::domain::organization::Organization;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrganizationClient {
    api: Arc<dyn GrafanaApi>,
}

impl OrganizationClient {
    pub fn new(api: Arc<dyn GrafanaApi>) -> Self {
        Self { api }
    }

    /// Returns `None` when Grafana has no organization with this name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Organization>, GrafanaError> {
        require_name(name)?;
        let path = format!("/api/orgs/name/{}", urlencoding::encode(name));
        let response = self.api.get(&path).await?;
        match (response.get("id").and_then(Value::as_i64), response.get("name").and_then(Value::as_str)) {
            (Some(id), Some(name)) => Ok(Some(Organization::new(id, name))),
            _ => {
                tracing::debug!(%name, %response, "Organization not found");
                Ok(None)
            }
        }
    }

    pub async fn create(&self, name: &str) -> Result<Organization, GrafanaError> {
        require_name(name)?;
        let body = json!({ "name": name });
        let response = self.api.post("/api/orgs", Some(&body)).await?;
        match response.get("orgId").and_then(Value::as_i64) {
            Some(id) => Ok(Organization::new(id, name)),
            None => {
                tracing::error!(%name, %response, "Create organization failed");
                Err(GrafanaError::unexpected_response(
                    format!("Create organization `{name}`"),
                    response,
                ))
            }
        }
    }

    /// Selects the organization the following requests of this user act on.
    pub async fn switch_organization(&self, id: i64) -> Result<(), GrafanaError> {
        let path = format!("/api/user/using/{id}");
        let response = self.api.post(&path, None).await?;
        let switched = response
            .get("message")
            .and_then(Value::as_str)
            .is_some_and(|message| message.starts_with("Active"));
        if switched {
            Ok(())
        } else {
            tracing::error!(id, %response, "Switch organization failed");
            Err(GrafanaError::unexpected_response(
                format!("Switch organization `{id}`"),
                response,
            ))
        }
    }

    /// Looks the organization up and creates it when missing. Not atomic.
    pub async fn create_if_absent(&self, name: &str) -> Result<Organization, GrafanaError> {
        match self.get_by_name(name).await? {
            Some(organization) => Ok(organization),
            None => self.create(name).await,
        }
    }
}

fn require_name(name: &str) -> Result<(), GrafanaError> {
    if name.is_empty() {
        return Err(GrafanaError::invalid_argument("organization name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grafana_api::testing::ScriptedGrafana;

    #[tokio::test]
    async fn test_create_if_absent_reuses_existing_organization() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"id": 4, "name": "demo-project"})));
        let client = OrganizationClient::new(api.clone());

        let organization = client.create_if_absent("demo-project").await.unwrap();

        assert_eq!(organization, Organization::new(4, "demo-project"));
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "/api/orgs/name/demo-project");
    }

    #[tokio::test]
    async fn test_create_if_absent_creates_missing_organization() {
        let api = Arc::new(
            ScriptedGrafana::new()
                .respond(json!({"message": "Organization not found"}))
                .respond(json!({"orgId": 7, "message": "Organization created"})),
        );
        let client = OrganizationClient::new(api.clone());

        let organization = client.create_if_absent("demo-project").await.unwrap();

        assert_eq!(organization, Organization::new(7, "demo-project"));
        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].method, "POST");
        assert_eq!(calls[1].path, "/api/orgs");
        assert_eq!(calls[1].body, Some(json!({"name": "demo-project"})));
    }

    #[tokio::test]
    async fn test_names_are_percent_encoded() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({})));
        let client = OrganizationClient::new(api.clone());

        assert_eq!(client.get_by_name("team a/b").await.unwrap(), None);
        assert_eq!(api.calls()[0].path, "/api/orgs/name/team%20a%2Fb");
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_without_io() {
        let api = Arc::new(ScriptedGrafana::new());
        let client = OrganizationClient::new(api.clone());

        let error = client.create("").await.unwrap_err();

        assert!(matches!(error, GrafanaError::InvalidArgument(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_without_org_id_fails() {
        let api = Arc::new(ScriptedGrafana::new().respond(json!({"message": "Organization name taken"})));
        let client = OrganizationClient::new(api);

        let error = client.create("demo-project").await.unwrap_err();

        assert!(matches!(error, GrafanaError::UnexpectedResponse { .. }));
    }

    #[tokio::test]
    async fn test_switch_organization_requires_active_message() {
        let api = Arc::new(
            ScriptedGrafana::new()
                .respond(json!({"message": "Active organization changed"}))
                .respond(json!({"message": "Access denied"})),
        );
        let client = OrganizationClient::new(api.clone());

        client.switch_organization(7).await.unwrap();
        assert!(client.switch_organization(8).await.is_err());

        let calls = api.calls();
        assert_eq!(calls[0].path, "/api/user/using/7");
        assert_eq!(calls[0].body, None);
    }
}
