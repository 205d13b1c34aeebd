// Domain layer - Grafana resources and the dashboard catalog
pub mod catalog;
pub mod dashboard;
pub mod datasource;
pub mod folder;
pub mod organization;
pub mod variable;
