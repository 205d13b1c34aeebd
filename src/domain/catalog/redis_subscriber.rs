// naiveredis subscriber dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![execution(ctx), overview(ctx)]
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("Execution")
        .query_variable("name", "Redis cluster", "naiveredis_subscriber_exec_count", "name")
        .graph(
            "naiveredis_subscriber_exec_count",
            "Messages consumed between two scrapes",
            r#"naiveredis_subscriber_exec_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_subscriber_exec_peak_tps_count",
            "Peak messages consumed per second between two scrapes",
            r#"naiveredis_subscriber_exec_peak_tps_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_subscriber_avg_exec_time_millisecond",
            "Average time to consume a single message between two scrapes",
            r#"naiveredis_subscriber_avg_exec_time_millisecond{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_subscriber_max_exec_time_millisecond",
            "Longest time to consume a single message between two scrapes",
            r#"naiveredis_subscriber_max_exec_time_millisecond{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        );
    let errors = [
        ("DecodeError", "Messages that failed to decode between two scrapes"),
        ("ConsumeError", "Messages that failed to be consumed between two scrapes"),
        ("UnexpectedError", "Messages whose consumption failed unexpectedly between two scrapes"),
        ("SlowConsumption", "Messages consumed too slowly between two scrapes"),
    ];
    for (error_type, description) in errors {
        layout = layout.graph(
            &format!("naiveredis_subscriber_exec_error_count:{error_type}"),
            description,
            &format!(
                r#"naiveredis_subscriber_exec_error_count{{name=~"[[name]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{instance}}",
        );
    }
    layout.finish()
}

pub fn overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Overview")
        .query_variable("name", "Redis cluster", "job:naiveredis_subscriber_exec_count:sum", "name")
        .graph(
            "job:naiveredis_subscriber_exec_count:sum",
            "Messages consumed between two scrapes, per job and cluster",
            r#"job:naiveredis_subscriber_exec_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_subscriber_exec_peak_tps_count:sum",
            "Estimated peak messages consumed per second between two scrapes, per job and cluster. The real peak is usually lower",
            r#"job:naiveredis_subscriber_exec_peak_tps_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_subscriber_max_exec_time_millisecond:max",
            "Longest time to consume a single message between two scrapes in milliseconds, per job and cluster",
            r#"job:naiveredis_subscriber_max_exec_time_millisecond:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_subscriber_avg_exec_time_millisecond:avg",
            "Average time to consume a single message between two scrapes in milliseconds, per job and cluster",
            r#"job:naiveredis_subscriber_avg_exec_time_millisecond:avg{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_subscriber_exec_error_count:sum",
            "Failed consumptions between two scrapes, slow ones included, per job and cluster",
            r#"job:naiveredis_subscriber_exec_error_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .finish()
}
