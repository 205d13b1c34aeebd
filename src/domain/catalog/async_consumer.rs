// naiveasync consumer dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![execution(ctx), overview(ctx)]
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable("type", "Message type", "naiveasync_consumer_polled_count", "type")
        .graph(
            "naiveasync_consumer_polled_count",
            "Messages polled between two scrapes",
            r#"naiveasync_consumer_polled_count{type=~"[[type]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveasync_consumer_success_count",
            "Messages consumed successfully between two scrapes",
            r#"naiveasync_consumer_success_count{type=~"[[type]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveasync_consumer_max_delay_milliseconds",
            "Maximum delivery delay between two scrapes (poll time minus send time), in milliseconds",
            r#"naiveasync_consumer_max_delay_milliseconds{type=~"[[type]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveasync_consumer_avg_delay_milliseconds",
            "Average delivery delay between two scrapes (poll time minus send time), in milliseconds",
            r#"naiveasync_consumer_avg_delay_milliseconds{type=~"[[type]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveasync_consumer_exec_error_count",
            "Consume errors between two scrapes, Kafka failures included, across all message types",
            r#"naiveasync_consumer_exec_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Overview")
        .graph(
            "job:naiveasync_consumer_polled_count:sum",
            "Messages polled between two scrapes, summed per job",
            r#"job:naiveasync_consumer_polled_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveasync_consumer_success_count:sum",
            "Messages consumed successfully between two scrapes, summed per job",
            r#"job:naiveasync_consumer_success_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveasync_consumer_max_delay_milliseconds:max",
            "Maximum delivery delay between two scrapes in milliseconds, max per job",
            r#"job:naiveasync_consumer_max_delay_milliseconds:max{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveasync_consumer_avg_delay_milliseconds:avg",
            "Average delivery delay between two scrapes in milliseconds, averaged per job",
            r#"job:naiveasync_consumer_avg_delay_milliseconds:avg{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveasync_consumer_exec_error_count:sum",
            "Consume errors between two scrapes, Kafka failures included, summed per job",
            r#"job:naiveasync_consumer_exec_error_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_panel_ignores_type() {
        let ctx = DashboardContext::new("demo", "30s", "Prometheus");
        let dashboard = execution(&ctx);

        let crate::domain::dashboard::Panel::Graph(last) = &dashboard.panels[4];
        assert_eq!(last.targets[0].expr, r#"naiveasync_consumer_exec_error_count{job="[[job]]"}"#);
        assert_eq!(last.grid_pos.y, 16);
    }
}
