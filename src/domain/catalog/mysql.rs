// MySQL JDBC client dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![
        datasource(ctx),
        error(ctx),
        execution(ctx),
        overview(ctx),
        socket(ctx),
        sql_stat(ctx),
    ]
}

pub fn datasource(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Datasource")
        .query_variable("database", "Database", "mysql_jdbc_datasource_acquired_connection_count", "database")
        .graph(
            "mysql_jdbc_datasource_acquired_connection_count",
            "Pool connections in use at scrape time",
            r#"mysql_jdbc_datasource_acquired_connection_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_datasource_max_acquired_connection_count",
            "Most pool connections in use between two scrapes",
            r#"mysql_jdbc_datasource_max_acquired_connection_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_datasource_connection_leaked_count",
            "Connection leaks detected by the pool between two scrapes",
            r#"mysql_jdbc_datasource_connection_leaked_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_datasource_get_connection_failed_count",
            "Failed attempts to acquire a pool connection between two scrapes",
            r#"mysql_jdbc_datasource_get_connection_failed_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn error(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("Error")
        .query_variable("database", "Database", "mysql_jdbc_exec_error_count", "database");
    for (error_type, description) in [
        ("Timeout", "SQL statements that timed out between two scrapes"),
        ("SlowExecution", "SQL statements that ran too slowly between two scrapes"),
        (
            "DuplicateEntryForKey",
            "SQL statements that hit a primary or unique key conflict between two scrapes",
        ),
        ("MysqlError", "SQL statements rejected by the MySQL server between two scrapes"),
        (
            "IllegalState",
            "SQL statements issued on a closed channel or statement between two scrapes",
        ),
        ("InvalidParameter", "SQL statements with an invalid parameter value between two scrapes"),
        ("ResultSetError", "ResultSet operations that failed between two scrapes"),
        ("UnexpectedError", "SQL statements that failed unexpectedly between two scrapes"),
    ] {
        layout = layout.graph(
            &format!("mysql_jdbc_exec_error_count:{error_type}"),
            description,
            &format!(
                r#"mysql_jdbc_exec_error_count{{errorType="{error_type}",database="[[database]]",job="[[job]]"}}"#
            ),
            "{{instance}}",
        );
    }
    layout
        .graph(
            "mysql_jdbc_sql_feature_not_supported",
            "SQLFeatureNotSupportedException raised between two scrapes, across all databases",
            r#"mysql_jdbc_sql_feature_not_supported{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable("database", "Database", "mysql_jdbc_exec_count", "database")
        .graph(
            "mysql_jdbc_exec_count",
            "SQL statements executed between two scrapes",
            r#"mysql_jdbc_exec_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_exec_peak_tps_count",
            "Peak SQL statements per second between two scrapes",
            r#"mysql_jdbc_exec_peak_tps_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_avg_exec_time_millisecond",
            "Average execution time per SQL statement between two scrapes, in milliseconds",
            r#"mysql_jdbc_avg_exec_time_millisecond{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_max_exec_time_millisecond",
            "Longest single SQL statement between two scrapes, in milliseconds",
            r#"mysql_jdbc_max_exec_time_millisecond{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Overview")
        .query_variable("database", "Database", "job:mysql_jdbc_exec_count:sum", "database")
        .graph(
            "job:mysql_jdbc_exec_count:sum",
            "SQL statements executed between two scrapes, per job and database",
            r#"job:mysql_jdbc_exec_count:sum{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .graph(
            "job:mysql_jdbc_exec_error_count:sum",
            "Failed SQL statements between two scrapes, slow ones included, per job and database",
            r#"job:mysql_jdbc_exec_error_count:sum{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .graph(
            "job:mysql_jdbc_exec_peak_tps_count:sum",
            "Estimated peak SQL statements per second between two scrapes, per job and database. The real peak is usually lower",
            r#"job:mysql_jdbc_exec_peak_tps_count:sum{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .graph(
            "job:mysql_jdbc_max_exec_time_millisecond:max",
            "Longest single SQL statement between two scrapes in milliseconds, per job and database",
            r#"job:mysql_jdbc_max_exec_time_millisecond:max{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .graph(
            "job:mysql_jdbc_avg_exec_time_millisecond:avg",
            "Average execution time per SQL statement between two scrapes in milliseconds, per job and database",
            r#"job:mysql_jdbc_avg_exec_time_millisecond:avg{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .graph(
            "job:mysql_jdbc_socket_read_megabytes:sum",
            "Bytes read from sockets between two scrapes in MB, per job and database",
            r#"job:mysql_jdbc_socket_read_megabytes:sum{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .graph(
            "job:mysql_jdbc_socket_write_megabytes:sum",
            "Bytes written to sockets between two scrapes in MB, per job and database",
            r#"job:mysql_jdbc_socket_write_megabytes:sum{database=~"[[database]]",job="[[job]]"}"#,
            "{{database}}",
        )
        .finish()
}

pub fn socket(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Socket")
        .query_variable("database", "Database", "mysql_jdbc_socket_read_count", "database")
        .graph(
            "mysql_jdbc_socket_read_count",
            "Socket reads between two scrapes",
            r#"mysql_jdbc_socket_read_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_socket_read_megabytes",
            "Bytes read from sockets between two scrapes, in MB",
            r#"mysql_jdbc_socket_read_bytes{database="[[database]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_socket_max_read_kilobytes",
            "Largest single socket read between two scrapes, in KB",
            r#"mysql_jdbc_socket_max_read_bytes{database="[[database]]",job="[[job]]"} / 1024"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_socket_write_count",
            "Socket writes between two scrapes",
            r#"mysql_jdbc_socket_write_count{database="[[database]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_socket_write_megabytes",
            "Bytes written to sockets between two scrapes, in MB",
            r#"mysql_jdbc_socket_write_bytes{database="[[database]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "mysql_jdbc_socket_max_write_kilobytes",
            "Largest single socket write between two scrapes, in KB",
            r#"mysql_jdbc_socket_max_write_bytes{database="[[database]]",job="[[job]]"} / 1024"#,
            "{{instance}}",
        )
        .finish()
}

pub fn sql_stat(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("SqlStat")
        .query_variable("database", "Database", "mysql_jdbc_select_count", "database");
    for (statement, rows_verb) in [
        ("select", "returned"),
        ("insert", "inserted"),
        ("update", "updated"),
        ("delete", "deleted"),
    ] {
        let keyword = statement.to_uppercase();
        layout = layout
            .graph(
                &format!("mysql_jdbc_{statement}_count"),
                &format!("{keyword} statements executed between two scrapes"),
                &format!(r#"mysql_jdbc_{statement}_count{{database="[[database]]",job="[[job]]"}}"#),
                "{{instance}}",
            )
            .graph(
                &format!("mysql_jdbc_{statement}_rows_count"),
                &format!("Rows {rows_verb} by all {keyword} statements between two scrapes"),
                &format!(r#"mysql_jdbc_{statement}_rows_count{{database="[[database]]",job="[[job]]"}}"#),
                "{{instance}}",
            )
            .graph(
                &format!("mysql_jdbc_max_{statement}_rows_count"),
                &format!("Most rows {rows_verb} by a single {keyword} statement between two scrapes"),
                &format!(r#"mysql_jdbc_max_{statement}_rows_count{{database="[[database]]",job="[[job]]"}}"#),
                "{{instance}}",
            );
    }
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Panel;

    fn ctx() -> DashboardContext {
        DashboardContext::new("demo-project", "30s", "Prometheus")
    }

    #[test]
    fn test_error_panels_put_error_type_first() {
        let dashboard = error(&ctx());

        assert_eq!(dashboard.panels.len(), 9);
        let Panel::Graph(first) = &dashboard.panels[0];
        assert_eq!(first.title, "mysql_jdbc_exec_error_count:Timeout");
        assert_eq!(
            first.targets[0].expr,
            r#"mysql_jdbc_exec_error_count{errorType="Timeout",database="[[database]]",job="[[job]]"}"#
        );
    }

    #[test]
    fn test_overview_groups_by_database() {
        let dashboard = overview(&ctx());

        for panel in &dashboard.panels {
            let Panel::Graph(graph) = panel;
            assert!(graph.targets[0].expr.contains(r#"database=~"[[database]]""#));
            assert_eq!(graph.targets[0].legend_format, "{{database}}");
        }
    }

    #[test]
    fn test_sql_stat_covers_every_statement_kind() {
        let dashboard = sql_stat(&ctx());

        let titles: Vec<&str> = dashboard
            .panels
            .iter()
            .map(|panel| {
                let Panel::Graph(graph) = panel;
                graph.title.as_str()
            })
            .collect();
        assert_eq!(titles.len(), 12);
        assert_eq!(titles[0], "mysql_jdbc_select_count");
        assert_eq!(titles[5], "mysql_jdbc_max_insert_rows_count");
        assert_eq!(titles[11], "mysql_jdbc_max_delete_rows_count");

        let Panel::Graph(update) = &dashboard.panels[6];
        assert_eq!(
            update.targets[0].expr,
            r#"mysql_jdbc_update_count{database="[[database]]",job="[[job]]"}"#
        );
    }
}
