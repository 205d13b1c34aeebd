// Dashboards builder - pushes one product's dashboards into an organization
use crate::application::dashboard_client::DashboardClient;
use crate::application::datasource_client::DataSourceClient;
use crate::application::error::GrafanaError;
use crate::application::folder_client::FolderClient;
use crate::application::grafana_api::GrafanaApi;
use crate::application::organization_client::OrganizationClient;
use crate::application::progress::ProgressWriter;
use crate::domain::catalog::{DashboardContext, Product};
use crate::domain::datasource::DataSource;
use std::sync::Arc;

pub struct DashboardsBuilder {
    product: Product,
    datasource: DataSource,
    register_datasource: bool,
    organizations: OrganizationClient,
    datasources: DataSourceClient,
    folders: FolderClient,
    dashboards: DashboardClient,
}

impl DashboardsBuilder {
    /// Panels query `datasource` by name; it is only registered when asked to.
    pub fn new(product: Product, api: Arc<dyn GrafanaApi>, datasource: DataSource) -> Self {
        Self {
            product,
            datasource,
            register_datasource: false,
            organizations: OrganizationClient::new(api.clone()),
            datasources: DataSourceClient::new(api.clone()),
            folders: FolderClient::new(api.clone()),
            dashboards: DashboardClient::new(api),
        }
    }

    pub fn register_datasource(mut self, register: bool) -> Self {
        self.register_datasource = register;
        self
    }

    pub fn product(&self) -> Product {
        self.product
    }

    /// Runs the whole workflow in order and stops at the first failure. Nothing is rolled back.
    pub async fn build(
        &self,
        organization: &str,
        interval: &str,
        progress: &mut ProgressWriter,
    ) -> Result<(), GrafanaError> {
        let organization = organization_name(organization)?;
        tracing::debug!(product = %self.product, %organization, %interval, "Building dashboards");

        let org = self.organizations.create_if_absent(organization).await?;
        progress.print(&format!("Fetch organization success: {org}"));

        self.organizations.switch_organization(org.id).await?;
        progress.print("Switch organization success.");

        if self.register_datasource {
            let datasource = match self.datasources.get_by_name(&self.datasource.name).await? {
                Some(existing) => existing,
                None => self.datasources.create(&self.datasource).await?,
            };
            progress.print(&format!("Register datasource success: {datasource}"));
        }

        let folder = self.folders.create(self.product.folder_name()).await?;
        progress.print(&format!("Create folder success: {folder}"));

        let ctx = DashboardContext::new(organization, interval, self.datasource.name.as_str());
        for dashboard in self.product.dashboards(&ctx) {
            self.dashboards.create(&dashboard, Some(folder.id)).await?;
            progress.print(&format!("Create dashboard success: `{}`.", dashboard.title));
        }

        progress.print(&format!(
            "Create dashboards end. Builder: `{}`.",
            self.product.builder_name()
        ));
        Ok(())
    }
}

/// Trims the organization name, which doubles as the Prometheus job. Blank names are rejected.
pub fn organization_name(organization: &str) -> Result<&str, GrafanaError> {
    let organization = organization.trim();
    if organization.is_empty() {
        return Err(GrafanaError::invalid_argument("organization name must not be empty"));
    }
    Ok(organization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grafana_api::testing::ScriptedGrafana;
    use crate::application::progress::testing::SharedBuffer;
    use serde_json::json;

    fn prometheus() -> DataSource {
        DataSource::prometheus("Prometheus", "http://localhost:9090")
    }

    fn new_organization_script() -> ScriptedGrafana {
        ScriptedGrafana::new()
            .respond(json!({"message": "Organization not found"}))
            .respond(json!({"orgId": 7, "message": "Organization created"}))
            .respond(json!({"message": "Active organization changed"}))
    }

    #[tokio::test]
    async fn test_build_creates_everything_in_order() {
        let mut script = new_organization_script().respond(json!({"id": 3, "title": "hotspot"}));
        for id in 0..5 {
            script = script.respond(json!({"id": 100 + id, "status": "success"}));
        }
        let api = Arc::new(script);
        let builder = DashboardsBuilder::new(Product::Hotspot, api.clone(), prometheus());
        let buffer = SharedBuffer::default();
        let mut progress = ProgressWriter::new(buffer.clone());

        builder.build(" demo-project ", "30s", &mut progress).await.unwrap();

        let calls = api.calls();
        let requests: Vec<(&str, &str)> = calls.iter().map(|c| (c.method, c.path.as_str())).collect();
        assert_eq!(
            requests,
            vec![
                ("GET", "/api/orgs/name/demo-project"),
                ("POST", "/api/orgs"),
                ("POST", "/api/user/using/7"),
                ("POST", "/api/folders"),
                ("POST", "/api/dashboards/db"),
                ("POST", "/api/dashboards/db"),
                ("POST", "/api/dashboards/db"),
                ("POST", "/api/dashboards/db"),
                ("POST", "/api/dashboards/db"),
            ]
        );
        assert_eq!(calls[3].body, Some(json!({"title": "hotspot"})));

        let titles: Vec<&str> = calls[4..]
            .iter()
            .map(|c| {
                let body = c.body.as_ref().unwrap();
                assert_eq!(body["folderId"], json!(3));
                body["dashboard"]["title"].as_str().unwrap()
            })
            .collect();
        assert_eq!(titles, vec!["ClassLoading", "GarbageCollector", "Memory", "MemoryPool", "Thread"]);

        let job = &calls[4].body.as_ref().unwrap()["dashboard"]["templating"]["list"][1];
        assert_eq!(job["query"], json!("demo-project"));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].ends_with("Fetch organization success: Organization{id=7, name='demo-project'}"));
        assert!(lines[1].ends_with("Switch organization success."));
        assert!(lines[2].ends_with("Create folder success: Folder{id=3, title='hotspot'}"));
        assert!(lines[3].ends_with("Create dashboard success: `ClassLoading`."));
        assert!(lines[8].ends_with("Create dashboards end. Builder: `HotspotDashboardsBuilder`."));
    }

    #[tokio::test]
    async fn test_build_stops_after_first_failure() {
        let api = Arc::new(
            new_organization_script()
                .respond(json!({"id": 3}))
                .respond(json!({"id": 100}))
                .fail(GrafanaError::invalid_argument("injected")),
        );
        let builder = DashboardsBuilder::new(Product::Hotspot, api.clone(), prometheus());

        let result = builder.build("demo-project", "30s", &mut ProgressWriter::silent()).await;

        assert!(result.is_err());
        assert_eq!(api.calls().len(), 6);
    }

    #[tokio::test]
    async fn test_blank_organization_is_rejected_without_io() {
        let api = Arc::new(ScriptedGrafana::new());
        let builder = DashboardsBuilder::new(Product::Raven, api.clone(), prometheus());

        let result = builder.build("   ", "30s", &mut ProgressWriter::silent()).await;

        assert!(matches!(result, Err(GrafanaError::InvalidArgument(_))));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_registers_missing_datasource() {
        let api = Arc::new(
            new_organization_script()
                .respond(json!({"message": "Data source not found"}))
                .respond(json!({"datasource": {"id": 1, "name": "Prometheus"}, "id": 1}))
                .respond(json!({"id": 3}))
                .respond(json!({"id": 100})),
        );
        let builder = DashboardsBuilder::new(Product::AsyncProducer, api.clone(), prometheus())
            .register_datasource(true);
        let buffer = SharedBuffer::default();

        builder
            .build("demo-project", "1m", &mut ProgressWriter::new(buffer.clone()))
            .await
            .unwrap();

        let calls = api.calls();
        assert_eq!(calls[3].path, "/api/datasources/name/Prometheus");
        assert_eq!(calls[4].path, "/api/datasources");
        assert_eq!(calls[5].path, "/api/folders");
        assert_eq!(calls.len(), 7);
        assert!(buffer.lines()[2].contains("Register datasource success: DataSource{id=1"));
    }

    #[tokio::test]
    async fn test_existing_datasource_is_not_recreated() {
        let api = Arc::new(
            ScriptedGrafana::new()
                .respond(json!({"id": 7, "name": "demo-project"}))
                .respond(json!({"message": "Active organization changed"}))
                .respond(json!({
                    "id": 1,
                    "name": "Prometheus",
                    "type": "prometheus",
                    "url": "http://localhost:9090",
                    "access": "proxy"
                }))
                .respond(json!({"id": 3}))
                .respond(json!({"id": 100})),
        );
        let builder = DashboardsBuilder::new(Product::RedisPublisher, api.clone(), prometheus())
            .register_datasource(true);

        builder.build("demo-project", "30s", &mut ProgressWriter::silent()).await.unwrap();

        let posts: Vec<String> = api
            .calls()
            .into_iter()
            .filter(|c| c.method == "POST")
            .map(|c| c.path)
            .collect();
        assert_eq!(posts, vec!["/api/user/using/7", "/api/folders", "/api/dashboards/db"]);
    }
}
