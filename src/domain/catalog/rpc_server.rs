// naiverpc server dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![error(ctx), execution(ctx), socket(ctx)]
}

pub fn error(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Error")
        .query_variable("name", "RPC service", "naiverpc_server_exec_error_count", "name")
        .graph(
            "naiverpc_server_exec_error_count:InvocationError",
            "RPC methods that raised an exception between two scrapes",
            r#"naiverpc_server_exec_error_count{name=~"[[name]]",job="[[job]]",errorType="InvocationError"}"#,
            "{{instance}}",
        )
        .graph(
            "naiverpc_server_exec_error_count:SlowExecution",
            "RPC methods that ran too slowly between two scrapes",
            r#"naiverpc_server_exec_error_count{name=~"[[name]]",job="[[job]]",errorType="SlowExecution"}"#,
            "{{instance}}",
        )
        .graph(
            "naiverpc_server_threadPool_reject_count",
            "Tasks rejected by the RPC server thread pool between two scrapes",
            r#"naiverpc_server_threadPool_reject_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable("name", "RPC service", "naiverpc_server_exec_count", "name")
        .graph(
            "naiverpc_server_exec_count",
            "RPC methods executed between two scrapes",
            r#"naiverpc_server_exec_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiverpc_server_exec_peak_tps_count",
            "Peak RPC methods executed per second between two scrapes",
            r#"naiverpc_server_exec_peak_tps_count{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiverpc_server_avg_exec_time_millisecond",
            "Average time of a single RPC method between two scrapes, in milliseconds",
            r#"naiverpc_server_avg_exec_time_millisecond{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiverpc_server_max_exec_time_millisecond",
            "Longest single RPC method between two scrapes, in milliseconds",
            r#"naiverpc_server_max_exec_time_millisecond{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn socket(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Socket")
        .query_variable("name", "RPC service", "instance:naiverpc_server_socket_read_count:sum", "name")
        .graph(
            "instance:naiverpc_server_socket_read_count:sum",
            "Socket reads between two scrapes, per job, host and service",
            r#"instance:naiverpc_server_socket_read_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiverpc_server_socket_read_megabytes:sum",
            "Bytes read from sockets between two scrapes in MB, per job, host and service",
            r#"instance:naiverpc_server_socket_read_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiverpc_server_socket_max_read_bytes:max",
            "Largest single socket read between two scrapes, per job, host and service",
            r#"instance:naiverpc_server_socket_max_read_bytes:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiverpc_server_socket_write_count:sum",
            "Socket writes between two scrapes, per job, host and service",
            r#"instance:naiverpc_server_socket_write_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiverpc_server_socket_write_megabytes:sum",
            "Bytes written to sockets between two scrapes in MB, per job, host and service",
            r#"instance:naiverpc_server_socket_write_megabytes:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiverpc_server_socket_max_write_bytes:max",
            "Largest single socket write between two scrapes, per job, host and service",
            r#"instance:naiverpc_server_socket_max_write_bytes:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}
