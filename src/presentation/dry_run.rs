// Dry run - renders dashboards as JSON without contacting Grafana
use crate::application::dashboards_builder::organization_name;
use crate::domain::catalog::{DashboardContext, Product};
use std::io::Write;

/// Writes every dashboard of `products` as pretty JSON, one document after another.
/// Returns how many dashboards were written.
pub fn render_dashboards(
    out: &mut impl Write,
    organization: &str,
    interval: &str,
    datasource: &str,
    products: &[Product],
) -> anyhow::Result<usize> {
    let ctx = DashboardContext::new(organization_name(organization)?, interval, datasource);
    let mut rendered = 0;
    for product in products {
        for dashboard in product.dashboards(&ctx) {
            serde_json::to_writer_pretty(&mut *out, &dashboard)?;
            writeln!(out)?;
            rendered += 1;
        }
    }
    out.flush()?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::GrafanaError;
    use serde_json::{Deserializer, Value};

    #[test]
    fn test_renders_every_dashboard_of_every_product() {
        let mut out = Vec::new();

        let rendered = render_dashboards(
            &mut out,
            " demo-project ",
            "1m",
            "Prometheus",
            &[Product::Hotspot, Product::RpcServer],
        )
        .unwrap();

        assert_eq!(rendered, 8);
        let documents: Vec<Value> = Deserializer::from_slice(&out)
            .into_iter::<Value>()
            .collect::<Result<_, _>>()
            .unwrap();
        let titles: Vec<&str> = documents.iter().map(|d| d["title"].as_str().unwrap()).collect();
        assert_eq!(
            titles,
            vec!["ClassLoading", "GarbageCollector", "Memory", "MemoryPool", "Thread", "Error", "Execution", "Socket"]
        );
        let constants = &documents[0]["templating"]["list"];
        assert_eq!(constants[0]["query"], "1m");
        assert_eq!(constants[1]["query"], "demo-project");
    }

    #[test]
    fn test_blank_organization_renders_nothing() {
        let mut out = Vec::new();

        let error = render_dashboards(&mut out, "  ", "30s", "Prometheus", &[Product::Hotspot]).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<GrafanaError>(),
            Some(GrafanaError::InvalidArgument(_))
        ));
        assert!(out.is_empty());
    }
}
