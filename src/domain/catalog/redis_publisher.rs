// naiveredis publisher dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![execution(ctx)]
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable("name", "Redis cluster", "naiveredis_publisher_exec_count", "name")
        .graph(
            "naiveredis_publisher_exec_count",
            "Messages published between two scrapes",
            r#"naiveredis_publisher_exec_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_publisher_exec_peak_tps_count",
            "Peak messages published per second between two scrapes",
            r#"naiveredis_publisher_exec_peak_tps_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_publisher_avg_exec_time_millisecond",
            "Average time to publish a single message between two scrapes",
            r#"naiveredis_publisher_avg_exec_time_millisecond{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_publisher_max_exec_time_millisecond",
            "Longest time to publish a single message between two scrapes",
            r#"naiveredis_publisher_max_exec_time_millisecond{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        // Both error panels share the bare metric name as title.
        .graph(
            "naiveredis_publisher_exec_error_count",
            "Failed publishes between two scrapes",
            r#"naiveredis_publisher_exec_error_count{name=~"[[name]]",job="[[job]]",errorType="PublishError"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_publisher_exec_error_count",
            "Publishes that reached no subscriber between two scrapes",
            r#"naiveredis_publisher_exec_error_count{name=~"[[name]]",job="[[job]]",errorType="NoClient"}"#,
            "{{instance}}",
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Panel;

    #[test]
    fn test_error_panels_split_by_error_type() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let dashboard = execution(&ctx);

        assert_eq!(dashboard.panels.len(), 6);
        let Panel::Graph(publish_error) = &dashboard.panels[4];
        let Panel::Graph(no_client) = &dashboard.panels[5];
        assert_eq!(publish_error.title, no_client.title);
        assert!(publish_error.targets[0].expr.ends_with(r#"errorType="PublishError"}"#));
        assert!(no_client.targets[0].expr.ends_with(r#"errorType="NoClient"}"#));
    }
}
