// Application layer - Grafana resource clients and the build workflow
pub mod dashboard_client;
pub mod dashboards_builder;
pub mod datasource_client;
pub mod error;
pub mod folder_client;
pub mod grafana_api;
pub mod organization_client;
pub mod progress;
