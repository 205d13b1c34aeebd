// Raven IM service dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![
        byte_message(ctx),
        byte_message_overview(ctx),
        im_client(ctx),
        im_client_overview(ctx),
        manager(ctx),
        manager_execution(ctx),
        manager_socket(ctx),
        manager_socket_overview(ctx),
    ]
}

pub fn byte_message(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ByteMessage")
        .graph(
            "raven_byte_message_count",
            "Messages queued for sending between two scrapes",
            r#"raven_byte_message_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_byte_message_total_megabytes",
            "Bytes queued for sending between two scrapes, in MB",
            r#"raven_byte_message_total_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "raven_byte_message_max_bytes",
            "Largest single message queued for sending between two scrapes, in bytes",
            r#"raven_byte_message_max_bytes{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_byte_message_sent_count",
            "Messages sent successfully between two scrapes",
            r#"raven_byte_message_sent_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_byte_message_sent_avg_delay_milliseconds",
            "Average delay of successfully sent messages between two scrapes, in milliseconds",
            r#"raven_byte_message_sent_avg_delay_milliseconds{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_byte_message_sent_max_delay_milliseconds",
            "Maximum delay of successfully sent messages between two scrapes, in milliseconds",
            r#"raven_byte_message_sent_max_delay_milliseconds{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn byte_message_overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ByteMessageOverview")
        .graph(
            "job:raven_byte_message_count:sum",
            "Messages queued for sending between two scrapes, summed per job",
            r#"job:raven_byte_message_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:raven_byte_message_total_megabytes:sum",
            "Bytes queued for sending between two scrapes in MB, summed per job",
            r#"job:raven_byte_message_total_megabytes:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:raven_byte_message_max_bytes:max",
            "Largest single message queued between two scrapes in bytes, max per job",
            r#"job:raven_byte_message_max_bytes:max{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:raven_byte_message_error_count:sum",
            "Messages that failed to send between two scrapes, summed per job",
            r#"job:raven_byte_message_error_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:raven_byte_message_sent_count:sum",
            "Messages sent successfully between two scrapes, summed per job",
            r#"job:raven_byte_message_sent_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:raven_byte_message_sent_avg_delay_milliseconds:avg",
            "Average delay of sent messages between two scrapes in milliseconds, averaged per job",
            r#"job:raven_byte_message_sent_avg_delay_milliseconds:avg{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:raven_byte_message_sent_max_delay_milliseconds:max",
            "Maximum delay of sent messages between two scrapes in milliseconds, max per job",
            r#"job:raven_byte_message_sent_max_delay_milliseconds:max{job="[[job]]"}"#,
            "{{job}}",
        )
        .finish()
}

pub fn im_client(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("IMClient")
        .graph(
            "raven_client_established_count",
            "IM clients connected at scrape time",
            r#"raven_client_established_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_client_created_count",
            "IM clients created between two scrapes",
            r#"raven_client_created_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_client_closed_count",
            "IM clients closed between two scrapes",
            r#"raven_client_closed_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_client_established_error_count",
            "IM clients that failed to connect between two scrapes",
            r#"raven_client_established_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_client_closed_error_count",
            "IM clients that failed to close cleanly between two scrapes",
            r#"raven_client_closed_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_client_timeout_count",
            "IM clients that hit a timeout between two scrapes",
            r#"raven_client_timeout_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn im_client_overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("IMClientOverview")
        .graph(
            "job:raven_client_established_count:sum",
            "IM clients connected at scrape time, summed per job",
            r#"job:raven_client_established_count:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "job:raven_client_created_count:sum",
            "IM clients created between two scrapes, summed per job",
            r#"job:raven_client_created_count:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "job:raven_client_closed_count:sum",
            "IM clients closed between two scrapes, summed per job",
            r#"job:raven_client_closed_count:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "job:raven_client_established_error_count:sum",
            "IM clients that failed to connect between two scrapes, summed per job",
            r#"job:raven_client_established_error_count:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "job:raven_client_closed_error_count:sum",
            "IM clients that failed to close cleanly between two scrapes, summed per job",
            r#"job:raven_client_closed_error_count:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "job:raven_client_timeout_count:sum",
            "IM clients that hit a timeout between two scrapes, summed per job",
            r#"job:raven_client_timeout_count:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn manager(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Manager")
        .graph(
            "raven_manager_count",
            "Available IM client managers at scrape time",
            r#"raven_manager_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_avg_client_count",
            "Average IM clients held per manager at scrape time",
            r#"raven_manager_avg_client_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_max_client_count",
            "Most IM clients held by a single manager at scrape time",
            r#"raven_manager_max_client_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_readable_client_count",
            "Readable IM clients between two scrapes. A client readable in several iterations is counted each time",
            r#"raven_manager_readable_client_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_writable_client_count",
            "Writable IM clients between two scrapes. A client writable in several iterations is counted each time",
            r#"raven_manager_writable_client_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn manager_execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ManagerExecution")
        .graph(
            "raven_manager_exec_count",
            "Iterations over all available IM clients between two scrapes",
            r#"raven_manager_exec_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_exec_peak_tps_count",
            "Peak iterations per second over all available IM clients between two scrapes",
            r#"raven_manager_exec_peak_tps_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_avg_exec_time_millisecond",
            "Average time of one iteration over all IM clients between two scrapes, in milliseconds",
            r#"raven_manager_avg_exec_time_millisecond{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_max_exec_time_millisecond",
            "Longest single iteration over all IM clients between two scrapes, in milliseconds",
            r#"raven_manager_max_exec_time_millisecond{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_exec_error_count:RegisterError",
            "IM client registrations that failed between two scrapes",
            r#"raven_manager_exec_error_count{job="[[job]]",errorType="RegisterError"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_exec_error_count:CommunicateError",
            "IM client communication failures between two scrapes",
            r#"raven_manager_exec_error_count{job="[[job]]",errorType="CommunicateError"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_exec_error_count:SelectError",
            "IM client selection failures between two scrapes",
            r#"raven_manager_exec_error_count{job="[[job]]",errorType="SelectError"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn manager_socket(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ManagerSocket")
        // Published dashboards plot the execution counter under this title.
        .graph(
            "raven_manager_socket_read_count",
            "Socket reads between two scrapes",
            r#"raven_manager_exec_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_socket_read_megabytes",
            "Bytes read from sockets between two scrapes, in MB",
            r#"raven_manager_socket_read_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_socket_max_read_bytes",
            "Largest single socket read between two scrapes, in bytes",
            r#"raven_manager_socket_max_read_bytes{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_socket_write_count",
            "Socket writes between two scrapes",
            r#"raven_manager_socket_write_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_socket_write_megabytes",
            "Bytes written to sockets between two scrapes, in MB",
            r#"raven_manager_socket_write_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "raven_manager_socket_max_write_bytes",
            "Largest single socket write between two scrapes, in bytes",
            r#"raven_manager_socket_max_write_bytes{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn manager_socket_overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ManagerSocketOverview")
        .graph(
            "job:raven_manager_socket_read_megabytes:sum",
            "Bytes read from sockets between two scrapes in MB, summed per job",
            r#"job:raven_manager_socket_read_megabytes:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "job:raven_manager_socket_write_megabytes:sum",
            "Bytes written to sockets between two scrapes in MB, summed per job",
            r#"job:raven_manager_socket_write_megabytes:sum{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}
