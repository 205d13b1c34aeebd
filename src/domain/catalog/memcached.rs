// naivecache memcached client dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![error(ctx), execution_detail(ctx), socket_detail(ctx)]
}

pub fn error(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Error")
        .query_variable(
            "name",
            "Memcached cluster",
            "instance:naivecache_memcached_exec_error_count:sum",
            "name",
        )
        .graph(
            "instance:naivecache_memcached_exec_error_count:sum:Timeout",
            "Memcached operations that timed out between two scrapes",
            r#"instance:naivecache_memcached_exec_error_count:sum{name=~"[[name]]",job="[[job]]",errorType="Timeout"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naivecache_memcached_exec_error_count:sum:KeyNotFound",
            "Memcached operations on a missing key between two scrapes",
            r#"instance:naivecache_memcached_exec_error_count:sum{name=~"[[name]]",job="[[job]]",errorType="KeyNotFound"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naivecache_memcached_exec_error_count:sum:MemcachedError",
            "Memcached operations that raised an error between two scrapes",
            r#"instance:naivecache_memcached_exec_error_count:sum{name=~"[[name]]",job="[[job]]",errorType="MemcachedError"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naivecache_memcached_exec_error_count:sum:SlowExecution",
            "Memcached operations that ran too slowly between two scrapes",
            r#"instance:naivecache_memcached_exec_error_count:sum{name=~"[[name]]",job="[[job]]",errorType="SlowExecution"}"#,
            "{{instance}}",
        )
        .graph(
            "naivecache_memcached_threadPool_reject_count",
            "Tasks rejected by the Memcached client thread pool between two scrapes",
            r#"naivecache_memcached_threadPool_reject_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution_detail(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ExecutionDetail")
        .query_variable("name", "Memcached cluster", "naivecache_memcached_exec_count", "name")
        .query_variable("instance", "Host", "naivecache_memcached_exec_count", "instance")
        .graph(
            "naivecache_memcached_exec_count",
            "Memcached operations executed between two scrapes",
            r#"naivecache_memcached_exec_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_exec_peak_tps_count",
            "Peak Memcached operations per second between two scrapes",
            r#"naivecache_memcached_exec_peak_tps_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_avg_exec_time_millisecond",
            "Average time of a single Memcached operation between two scrapes, in milliseconds",
            r#"naivecache_memcached_avg_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_max_exec_time_millisecond",
            "Maximum time of a single Memcached operation between two scrapes, in milliseconds",
            r#"naivecache_memcached_max_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_exec_error_count:Timeout",
            "Memcached operations that timed out between two scrapes",
            r#"naivecache_memcached_exec_error_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="Timeout"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_exec_error_count:KeyNotFound",
            "Memcached operations on a missing key between two scrapes",
            r#"naivecache_memcached_exec_error_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="KeyNotFound"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_exec_error_count:MemcachedError",
            "Memcached operations that raised an error between two scrapes",
            r#"naivecache_memcached_exec_error_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="MemcachedError"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_exec_error_count:SlowExecution",
            "Memcached operations that ran too slowly between two scrapes",
            r#"naivecache_memcached_exec_error_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="SlowExecution"}"#,
            "{{remoteAddress}}",
        )
        .finish()
}

pub fn socket_detail(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("SocketDetail")
        .query_variable("name", "Memcached cluster", "naivecache_memcached_socket_read_count", "name")
        .query_variable("instance", "Host", "naivecache_memcached_socket_read_count", "instance")
        .graph(
            "naivecache_memcached_socket_read_count",
            "Socket reads between two scrapes",
            r#"naivecache_memcached_socket_read_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_socket_read_bytes",
            "Bytes read from sockets between two scrapes",
            r#"naivecache_memcached_socket_read_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_socket_max_read_bytes",
            "Largest single socket read between two scrapes, in bytes",
            r#"naivecache_memcached_socket_max_read_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_socket_write_count",
            "Socket writes between two scrapes",
            r#"naivecache_memcached_socket_write_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_socket_write_bytes",
            "Bytes written to sockets between two scrapes",
            r#"naivecache_memcached_socket_write_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naivecache_memcached_socket_max_write_bytes",
            "Largest single socket write between two scrapes, in bytes",
            r#"naivecache_memcached_socket_max_write_bytes{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .finish()
}
