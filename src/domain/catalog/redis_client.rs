// naiveredis client dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

const ERROR_TYPES: [(&str, &str); 7] = [
    ("IllegalArgument", "Redis operations with an invalid argument between two scrapes"),
    ("IllegalState", "Redis operations issued on a closed channel or command between two scrapes"),
    ("Timeout", "Redis operations that timed out between two scrapes"),
    ("RedisError", "Redis operations rejected by the Redis server between two scrapes"),
    ("KeyNotFound", "Redis operations on a missing key between two scrapes"),
    ("UnexpectedError", "Redis operations that failed unexpectedly between two scrapes"),
    ("SlowExecution", "Redis operations that ran too slowly between two scrapes"),
];

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![
        compression(ctx),
        error(ctx),
        execution(ctx),
        execution_detail(ctx),
        overview(ctx),
        socket(ctx),
        socket_detail(ctx),
        thread_pool(ctx),
    ]
}

pub fn compression(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Compression")
        .graph(
            "naiveredis_compression_count",
            "Compressions performed between two scrapes",
            r#"naiveredis_compression_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_compression_reduce_bytes",
            "Bytes saved by compression between two scrapes",
            r#"naiveredis_compression_reduce_bytes{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn error(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("Error")
        .query_variable("name", "Redis cluster", "instance:naiveredis_exec_error_count:sum", "name");
    for (error_type, description) in ERROR_TYPES {
        layout = layout.graph(
            &format!("instance:naiveredis_exec_error_count:sum:{error_type}"),
            description,
            &format!(
                r#"instance:naiveredis_exec_error_count:sum{{name=~"[[name]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{instance}}",
        );
    }
    layout
        .graph(
            "naiveredis_threadPool_reject_count",
            "Tasks rejected by the Redis client thread pool between two scrapes",
            r#"naiveredis_threadPool_reject_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_cluster_unavailable_client_count",
            "Times the cluster client picked an unavailable Redis client between two scrapes",
            r#"naiveredis_cluster_unavailable_client_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_cluster_multi_get_error_count",
            "Failed multiGet calls on the cluster client between two scrapes",
            r#"naiveredis_cluster_multi_get_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable("name", "Redis cluster", "instance:naiveredis_exec_count:sum", "name")
        .graph(
            "instance:naiveredis_exec_count:sum",
            "Redis operations between two scrapes, per job, host and cluster",
            r#"instance:naiveredis_exec_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_exec_peak_tps_count:sum",
            "Estimated peak Redis operations per second between two scrapes, per job, host and cluster. The real peak is usually lower",
            r#"instance:naiveredis_exec_peak_tps_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_avg_exec_time_millisecond:avg",
            "Average time of a single Redis operation between two scrapes in milliseconds, per job, host and cluster",
            r#"instance:naiveredis_avg_exec_time_millisecond:avg{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_max_exec_time_millisecond:max",
            "Longest single Redis operation between two scrapes in milliseconds, per job, host and cluster",
            r#"instance:naiveredis_max_exec_time_millisecond:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution_detail(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("ExecutionDetail")
        .query_variable("name", "Redis cluster", "naiveredis_exec_count", "name")
        .query_variable("instance", "Host", "naiveredis_exec_count", "instance")
        .graph(
            "naiveredis_exec_count",
            "Redis operations between two scrapes",
            r#"naiveredis_exec_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_exec_peak_tps_count",
            "Peak Redis operations per second between two scrapes",
            r#"naiveredis_exec_peak_tps_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_avg_exec_time_millisecond",
            "Average time of a single Redis operation between two scrapes, in milliseconds",
            r#"naiveredis_avg_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_max_exec_time_millisecond",
            "Longest single Redis operation between two scrapes, in milliseconds",
            r#"naiveredis_max_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        );
    for (error_type, description) in ERROR_TYPES {
        layout = layout.graph(
            &format!("naiveredis_exec_error_count:{error_type}"),
            description,
            &format!(
                r#"naiveredis_exec_error_count{{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{remoteAddress}}",
        );
    }
    layout.finish()
}

pub fn overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Overview")
        .query_variable("name", "Redis cluster", "job:naiveredis_exec_count:sum", "name")
        .graph(
            "job:naiveredis_exec_count:sum",
            "Redis operations between two scrapes, per job and cluster",
            r#"job:naiveredis_exec_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_exec_peak_tps_count:sum",
            "Estimated peak Redis operations per second between two scrapes, per job and cluster. The real peak is usually lower",
            r#"job:naiveredis_exec_peak_tps_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_max_exec_time_millisecond:max",
            "Longest single Redis operation between two scrapes in milliseconds, per job and cluster",
            r#"job:naiveredis_max_exec_time_millisecond:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_avg_exec_time_millisecond:avg",
            "Average time of a single Redis operation between two scrapes in milliseconds, per job and cluster",
            r#"job:naiveredis_avg_exec_time_millisecond:avg{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_exec_error_count:sum",
            "Failed Redis operations between two scrapes, missing keys excluded, per job and cluster",
            r#"job:naiveredis_exec_error_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_threadPool_reject_count:sum",
            "Tasks rejected by the Redis client thread pool between two scrapes, summed per job across clusters",
            r#"job:naiveredis_threadPool_reject_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveredis_socket_read_megabytes:sum",
            "Bytes read from sockets between two scrapes in MB, per job and cluster",
            r#"job:naiveredis_socket_read_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_socket_write_megabytes:sum",
            "Bytes written to sockets between two scrapes in MB, per job and cluster",
            r#"job:naiveredis_socket_write_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .finish()
}

pub fn socket(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Socket")
        .query_variable("name", "Redis cluster", "instance:naiveredis_socket_read_count:sum", "name")
        .graph(
            "instance:naiveredis_socket_read_count:sum",
            "Socket reads between two scrapes, per job, host and cluster",
            r#"instance:naiveredis_socket_read_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_socket_read_megabytes:sum",
            "Bytes read from sockets between two scrapes in MB, per job, host and cluster",
            r#"instance:naiveredis_socket_read_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_socket_max_read_bytes:max",
            "Largest single socket read between two scrapes, per job, host and cluster",
            r#"instance:naiveredis_socket_max_read_bytes:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_socket_write_count:sum",
            "Socket writes between two scrapes, per job, host and cluster",
            r#"instance:naiveredis_socket_write_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_socket_write_megabytes:sum",
            "Bytes written to sockets between two scrapes in MB, per job, host and cluster",
            r#"instance:naiveredis_socket_write_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_socket_max_write_bytes:max",
            "Largest single socket write between two scrapes, per job, host and cluster",
            r#"instance:naiveredis_socket_max_write_bytes:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn socket_detail(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("SocketDetail")
        .query_variable("name", "Redis cluster", "naiveredis_socket_read_count", "name")
        .query_variable("instance", "Host", "naiveredis_socket_read_count", "instance")
        .graph(
            "naiveredis_socket_read_count",
            "Socket reads between two scrapes",
            r#"naiveredis_socket_read_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_socket_read_bytes",
            "Bytes read from sockets between two scrapes",
            r#"naiveredis_socket_read_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_socket_max_read_bytes",
            "Largest single socket read between two scrapes, in bytes",
            r#"naiveredis_socket_max_read_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_socket_write_count",
            "Socket writes between two scrapes",
            r#"naiveredis_socket_write_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_socket_write_bytes",
            "Bytes written to sockets between two scrapes",
            r#"naiveredis_socket_write_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_socket_max_write_bytes",
            "Largest single socket write between two scrapes, in bytes",
            r#"naiveredis_socket_max_write_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .finish()
}

pub fn thread_pool(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ThreadPool")
        .graph(
            "naiveredis_threadPool_reject_count",
            "Tasks rejected by all monitored thread pools between two scrapes",
            r#"naiveredis_threadPool_reject_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_threadPool_active_count",
            "Approximate active threads across all monitored thread pools at scrape time",
            r#"naiveredis_threadPool_active_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_threadPool_pool_size",
            "Threads across all monitored thread pools at scrape time",
            r#"naiveredis_threadPool_pool_size{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_threadPool_peak_pool_size",
            "Largest thread count ever reached across all monitored thread pools",
            r#"naiveredis_threadPool_peak_pool_size{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_threadPool_core_pool_size",
            "Configured core threads across all monitored thread pools",
            r#"naiveredis_threadPool_core_pool_size{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_threadPool_maximum_pool_size",
            "Configured maximum threads across all monitored thread pools",
            r#"naiveredis_threadPool_maximum_pool_size{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Panel;

    #[test]
    fn test_error_dashboard_lists_every_error_type() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let dashboard = error(&ctx);

        assert_eq!(dashboard.panels.len(), ERROR_TYPES.len() + 3);
        let Panel::Graph(timeout) = &dashboard.panels[2];
        assert_eq!(timeout.title, "instance:naiveredis_exec_error_count:sum:Timeout");
        assert_eq!(
            timeout.targets[0].expr,
            r#"instance:naiveredis_exec_error_count:sum{name=~"[[name]]",job="[[job]]",errorType="Timeout"}"#
        );
    }

    #[test]
    fn test_execution_detail_is_keyed_by_remote_address() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let dashboard = execution_detail(&ctx);

        assert_eq!(dashboard.variables.len(), 4);
        assert_eq!(dashboard.panels.len(), 11);
        for panel in &dashboard.panels {
            let Panel::Graph(graph) = panel;
            assert_eq!(graph.targets[0].legend_format, "{{remoteAddress}}");
        }
    }
}
