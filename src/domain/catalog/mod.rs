// Dashboard catalog - fixed dashboards for each supported metric namespace
pub mod async_consumer;
pub mod async_producer;
pub mod hotspot;
pub mod local_cache;
pub mod memcached;
pub mod mysql;
pub mod product;
pub mod raven;
pub mod redis_client;
pub mod redis_lock;
pub mod redis_publisher;
pub mod redis_subscriber;
pub mod rpc_client;
pub mod rpc_server;

use crate::domain::dashboard::{Dashboard, Target};
use crate::domain::variable::{Constant, Query};

pub use product::Product;

/// Inputs shared by every dashboard factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardContext {
    /// Prometheus job label, also used as the organization name.
    pub job: String,
    pub interval: String,
    pub datasource: String,
}

impl DashboardContext {
    pub fn new(
        job: impl Into<String>,
        interval: impl Into<String>,
        datasource: impl Into<String>,
    ) -> Self {
        Self {
            job: job.into(),
            interval: interval.into(),
            datasource: datasource.into(),
        }
    }

    /// Starts a dashboard carrying the `interval` and `job` constants.
    pub fn layout(&self, title: &str) -> DashboardLayout {
        let mut dashboard = Dashboard::new(title);
        dashboard
            .add_variable(Constant::new("interval", self.interval.as_str()))
            .add_variable(Constant::new("job", self.job.as_str()));
        DashboardLayout {
            job: self.job.clone(),
            datasource: self.datasource.clone(),
            dashboard,
        }
    }
}

/// Appends variables and graphs to a dashboard in declaration order.
#[derive(Debug, Clone)]
pub struct DashboardLayout {
    job: String,
    datasource: String,
    dashboard: Dashboard,
}

impl DashboardLayout {
    /// Adds a query variable listing the values of `captured_label` seen on `metric` for this job.
    pub fn query_variable(mut self, name: &str, label: &str, metric: &str, captured_label: &str) -> Self {
        let query = format!("{metric}{{job=\"{}\"}}", self.job);
        let regex = format!("/.*{captured_label}=\"([^\"]*).*/");
        self.dashboard
            .add_variable(Query::new(name, label, query, regex, self.datasource.as_str()));
        self
    }

    pub fn graph(mut self, title: &str, description: &str, expr: &str, legend_format: &str) -> Self {
        self.dashboard.add_graph(
            title,
            description,
            Target::new(expr, legend_format),
            self.datasource.as_str(),
        );
        self
    }

    pub fn finish(self) -> Dashboard {
        self.dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Panel;
    use crate::domain::variable::Variable;
    use std::collections::HashSet;

    fn context() -> DashboardContext {
        DashboardContext::new("demo-project", "30s", "Prometheus")
    }

    #[test]
    fn test_layout_starts_with_interval_and_job() {
        let dashboard = context().layout("Empty").finish();

        let names: Vec<&str> = dashboard.variables.iter().map(Variable::name).collect();
        assert_eq!(names, vec!["interval", "job"]);
        assert!(dashboard.panels.is_empty());
    }

    #[test]
    fn test_query_variable_embeds_job() {
        let dashboard = context()
            .layout("Execution")
            .query_variable("collectorName", "Collector", "hotspot_gc_count", "name")
            .finish();

        let Variable::Query(query) = &dashboard.variables[2] else {
            panic!("expected a query variable");
        };
        assert_eq!(query.name, "collectorName");
        assert_eq!(query.query, r#"hotspot_gc_count{job="demo-project"}"#);
        assert_eq!(query.regex, r#"/.*name="([^"]*).*/"#);
        assert_eq!(query.datasource, "Prometheus");
    }

    #[test]
    fn test_every_product_follows_layout_rules() {
        let context = context();
        for product in Product::ALL {
            let dashboards = product.dashboards(&context);
            assert!(!dashboards.is_empty(), "{product:?} has no dashboards");

            let titles: HashSet<&str> = dashboards.iter().map(|d| d.title.as_str()).collect();
            assert_eq!(titles.len(), dashboards.len(), "{product:?} repeats a title");

            for dashboard in &dashboards {
                assert!(!dashboard.panels.is_empty(), "{} has no panels", dashboard.title);

                let constants: Vec<&str> = dashboard.variables[..2].iter().map(Variable::name).collect();
                assert_eq!(constants, vec!["interval", "job"]);

                for (index, panel) in dashboard.panels.iter().enumerate() {
                    let Panel::Graph(graph) = panel;
                    assert_eq!(graph.id as usize, (index + 1) * 2);
                    assert_eq!(graph.datasource, "Prometheus");
                    assert_eq!(graph.interval, "$interval");
                    assert!(graph.targets.iter().all(|t| !t.expr.is_empty()));
                }

                for variable in &dashboard.variables[2..] {
                    let Variable::Query(query) = variable else {
                        panic!("{} has a non-query variable after the constants", dashboard.title);
                    };
                    assert!(query.query.ends_with(r#"{job="demo-project"}"#));
                }
            }
        }
    }
}
