// naiverpc client dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

const ERROR_TYPES: [(&str, &str); 4] = [
    ("TooBusy", "RPC calls rejected by a busy server between two scrapes"),
    ("Timeout", "RPC calls that timed out between two scrapes"),
    ("InvocationError", "RPC calls that raised an exception between two scrapes"),
    ("SlowExecution", "RPC calls that ran too slowly between two scrapes"),
];

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![
        error(ctx),
        execution_detail(ctx),
        overview(ctx),
        thread_pool(ctx),
    ]
}

pub fn error(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx.layout("Error").query_variable(
        "name",
        "RPC service",
        "instance:naiverpc_client_exec_error_count:sum",
        "name",
    );
    for (error_type, description) in ERROR_TYPES {
        layout = layout.graph(
            &format!("instance:naiverpc_client_exec_error_count:sum:{error_type}"),
            description,
            &format!(
                r#"instance:naiverpc_client_exec_error_count:sum{{name=~"[[name]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{instance}}",
        );
    }
    layout
        .graph(
            "naiverpc_client_threadPool_reject_count",
            "Tasks rejected by the RPC client thread pool between two scrapes",
            r#"naiverpc_client_threadPool_reject_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution_detail(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("ExecutionDetail")
        .query_variable("name", "RPC service", "naiverpc_client_exec_count", "name")
        .query_variable("instance", "Host", "naiverpc_client_exec_count", "instance")
        .graph(
            "naiverpc_client_exec_count",
            "RPC calls between two scrapes",
            r#"naiverpc_client_exec_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiverpc_client_exec_peak_tps_count",
            "Peak RPC calls per second between two scrapes",
            r#"naiverpc_client_exec_peak_tps_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiverpc_client_avg_exec_time_millisecond",
            "Average time of a single RPC call between two scrapes, in milliseconds",
            r#"naiverpc_client_avg_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiverpc_client_max_exec_time_millisecond",
            "Longest single RPC call between two scrapes, in milliseconds",
            r#"naiverpc_client_max_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        );
    for (error_type, description) in ERROR_TYPES {
        layout = layout.graph(
            &format!("naiverpc_client_exec_error_count:{error_type}"),
            description,
            &format!(
                r#"naiverpc_client_exec_error_count{{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{remoteAddress}}",
        );
    }
    layout.finish()
}

pub fn overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Overview")
        .query_variable("name", "RPC service", "job:naiverpc_client_exec_count:sum", "name")
        .graph(
            "job:naiverpc_client_exec_count:sum",
            "RPC calls between two scrapes, per job and service",
            r#"job:naiverpc_client_exec_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiverpc_client_exec_peak_tps_count:sum",
            "Estimated peak RPC calls per second between two scrapes, per job and service. The real peak is usually lower",
            r#"job:naiverpc_client_exec_peak_tps_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiverpc_client_exec_error_count:sum",
            "Failed RPC calls between two scrapes, slow ones included, per job and service",
            r#"job:naiverpc_client_exec_error_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiverpc_client_threadPool_reject_count:sum",
            "Tasks rejected by the RPC client thread pool between two scrapes, summed per job across services",
            r#"job:naiverpc_client_threadPool_reject_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiverpc_client_max_exec_time_millisecond:max",
            "Longest single RPC call between two scrapes in milliseconds, per job and service",
            r#"job:naiverpc_client_max_exec_time_millisecond:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiverpc_client_avg_exec_time_millisecond:avg",
            "Average time of a single RPC call between two scrapes in milliseconds, per job and service",
            r#"job:naiverpc_client_avg_exec_time_millisecond:avg{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiverpc_client_socket_read_megabytes:sum",
            "Bytes read from sockets between two scrapes in MB, per job and service",
            r#"job:naiverpc_client_socket_read_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiverpc_client_socket_write_megabytes:sum",
            "Bytes written to sockets between two scrapes in MB, per job and service",
            r#"job:naiverpc_client_socket_write_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .finish()
}

pub fn thread_pool(ctx: &DashboardContext) -> Dashboard {
    let gauges = [
        ("reject_count", "Tasks rejected by all monitored thread pools between two scrapes"),
        ("active_count", "Approximate active threads across all monitored thread pools at scrape time"),
        ("pool_size", "Threads across all monitored thread pools at scrape time"),
        ("peak_pool_size", "Largest thread count ever reached across all monitored thread pools"),
        ("core_pool_size", "Configured core threads across all monitored thread pools"),
        ("maximum_pool_size", "Configured maximum threads across all monitored thread pools"),
    ];
    let mut layout = ctx.layout("ThreadPool");
    for (suffix, description) in gauges {
        let metric = format!("naiverpc_client_threadPool_{suffix}");
        layout = layout.graph(
            &metric,
            description,
            &format!(r#"{metric}{{job="[[job]]"}}"#),
            "{{instance}}",
        );
    }
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Panel;

    #[test]
    fn test_thread_pool_gauges() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let dashboard = thread_pool(&ctx);

        assert_eq!(dashboard.variables.len(), 2);
        assert_eq!(dashboard.panels.len(), 6);
        let Panel::Graph(last) = &dashboard.panels[5];
        assert_eq!(last.title, "naiverpc_client_threadPool_maximum_pool_size");
        assert_eq!(
            last.targets[0].expr,
            r#"naiverpc_client_threadPool_maximum_pool_size{job="[[job]]"}"#
        );
    }

    #[test]
    fn test_overview_reject_count_is_job_wide() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let dashboard = overview(&ctx);

        let Panel::Graph(reject) = &dashboard.panels[3];
        assert_eq!(reject.targets[0].legend_format, "{{job}}");
        assert!(!reject.targets[0].expr.contains("[[name]]"));
    }
}
