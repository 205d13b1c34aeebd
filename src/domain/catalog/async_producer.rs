// naiveasync producer dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![execution(ctx)]
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable("type", "Message type", "naiveasync_producer_success_count", "type")
        .graph(
            "naiveasync_producer_success_count",
            "Messages sent successfully between two scrapes",
            r#"naiveasync_producer_success_count{type=~"[[type]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveasync_producer_error_count",
            "Messages that failed to send between two scrapes",
            r#"naiveasync_producer_error_count{type=~"[[type]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}
