// naiveredis distributed lock dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

const LOCK_ERROR_TYPES: [(&str, &str); 6] = [
    ("IllegalArgument", "Lock acquisitions with an invalid argument between two scrapes"),
    (
        "IllegalState",
        "Lock acquisitions issued on a closed channel or command between two scrapes",
    ),
    ("Timeout", "Lock acquisitions that timed out between two scrapes"),
    ("RedisError", "Lock acquisitions rejected by the Redis server between two scrapes"),
    ("LockExist", "Lock acquisitions that found the lock already held between two scrapes"),
    ("UnexpectedError", "Lock acquisitions that failed unexpectedly between two scrapes"),
];

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![
        distributed_lock(ctx),
        distributed_lock_overview(ctx),
        error(ctx),
        execution(ctx),
        execution_detail(ctx),
        execution_overview(ctx),
    ]
}

pub fn distributed_lock(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("DistributedLock")
        .graph(
            "naiveredis_distributed_lock_success_count",
            "Distributed locks acquired between two scrapes",
            r#"naiveredis_distributed_lock_success_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_fail_count",
            "Distributed lock acquisitions that failed between two scrapes",
            r#"naiveredis_distributed_lock_fail_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_error_count",
            "Distributed lock acquisitions that raised an error between two scrapes",
            r#"naiveredis_distributed_lock_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_unlock_success_count",
            "Distributed locks released between two scrapes",
            r#"naiveredis_distributed_lock_unlock_success_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_avg_holding_time_millisecond",
            "Average holding time of released locks between two scrapes, in milliseconds",
            r#"naiveredis_distributed_lock_avg_holding_time_millisecond{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_max_holding_time_millisecond",
            "Longest holding time of released locks between two scrapes, in milliseconds",
            r#"naiveredis_distributed_lock_max_holding_time_millisecond{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_unlock_error_count",
            "Distributed lock releases that raised an error between two scrapes",
            r#"naiveredis_distributed_lock_unlock_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn distributed_lock_overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("DistributedLockOverview")
        .graph(
            "job:naiveredis_distributed_lock_success_count:sum",
            "Distributed locks acquired between two scrapes, summed per job",
            r#"job:naiveredis_distributed_lock_success_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveredis_distributed_lock_fail_count:sum",
            "Distributed lock acquisitions that failed between two scrapes, summed per job",
            r#"job:naiveredis_distributed_lock_fail_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveredis_distributed_lock_error_count:sum",
            "Distributed lock acquisitions that raised an error between two scrapes, summed per job",
            r#"job:naiveredis_distributed_lock_error_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveredis_distributed_lock_unlock_success_count:sum",
            "Distributed locks released between two scrapes, summed per job",
            r#"job:naiveredis_distributed_lock_unlock_success_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveredis_distributed_lock_max_holding_time_millisecond:max",
            "Longest holding time of released locks between two scrapes in milliseconds, max per job",
            r#"job:naiveredis_distributed_lock_max_holding_time_millisecond:max{job="[[job]]"}"#,
            "{{job}}",
        )
        .graph(
            "job:naiveredis_distributed_lock_unlock_error_count:sum",
            "Distributed lock releases that raised an error between two scrapes, summed per job",
            r#"job:naiveredis_distributed_lock_unlock_error_count:sum{job="[[job]]"}"#,
            "{{job}}",
        )
        .finish()
}

pub fn error(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("Error")
        .query_variable(
            "name",
            "Redis cluster",
            "instance:naiveredis_lock_client_exec_error_count:sum",
            "name",
        )
        .graph(
            "naiveredis_distributed_lock_fail_count",
            "Distributed lock acquisitions that failed between two scrapes",
            r#"naiveredis_distributed_lock_fail_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_error_count",
            "Distributed lock acquisitions that raised an error between two scrapes",
            r#"naiveredis_distributed_lock_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naiveredis_distributed_lock_unlock_error_count",
            "Distributed lock releases that raised an error between two scrapes",
            r#"naiveredis_distributed_lock_unlock_error_count{job="[[job]]"}"#,
            "{{instance}}",
        );
    for (error_type, description) in LOCK_ERROR_TYPES {
        layout = layout.graph(
            &format!("instance:naiveredis_lock_client_exec_error_count:sum:{error_type}"),
            description,
            &format!(
                r#"instance:naiveredis_lock_client_exec_error_count:sum{{name=~"[[name]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{instance}}",
        );
    }
    layout.finish()
}

pub fn execution(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Execution")
        .query_variable(
            "name",
            "Redis cluster",
            "instance:naiveredis_lock_client_exec_count:sum",
            "name",
        )
        .graph(
            "instance:naiveredis_lock_client_exec_count:sum",
            "Lock acquisitions between two scrapes, per job, host and cluster",
            r#"instance:naiveredis_lock_client_exec_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_lock_client_exec_peak_tps_count:sum",
            "Estimated peak lock acquisitions per second between two scrapes, per job, host and cluster. The real peak is usually lower",
            r#"instance:naiveredis_lock_client_exec_peak_tps_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_lock_client_avg_exec_time_millisecond:avg",
            "Average time of a single lock acquisition between two scrapes in milliseconds, per job, host and cluster",
            r#"instance:naiveredis_lock_client_avg_exec_time_millisecond:avg{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "instance:naiveredis_lock_client_max_exec_time_millisecond:max",
            "Longest single lock acquisition between two scrapes in milliseconds, per job, host and cluster",
            r#"instance:naiveredis_lock_client_max_exec_time_millisecond:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn execution_detail(ctx: &DashboardContext) -> Dashboard {
    let mut layout = ctx
        .layout("ExecutionDetail")
        .query_variable("name", "Redis cluster", "naiveredis_lock_client_exec_count", "name")
        .query_variable("instance", "Host", "naiveredis_lock_client_exec_count", "instance")
        .graph(
            "naiveredis_lock_client_exec_count",
            "Lock acquisitions between two scrapes",
            r#"naiveredis_lock_client_exec_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_lock_client_exec_peak_tps_count",
            "Peak lock acquisitions per second between two scrapes",
            r#"naiveredis_lock_client_exec_peak_tps_count{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_lock_client_avg_exec_time_millisecond",
            "Average time of a single lock acquisition between two scrapes, in milliseconds",
            r#"naiveredis_lock_client_avg_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        )
        .graph(
            "naiveredis_lock_client_max_exec_time_millisecond",
            "Longest single lock acquisition between two scrapes, in milliseconds",
            r#"naiveredis_lock_client_max_exec_time_millisecond{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]"}"#,
            "{{remoteAddress}}",
        );
    for (error_type, description) in LOCK_ERROR_TYPES {
        layout = layout.graph(
            &format!("naiveredis_lock_client_exec_error_count:{error_type}"),
            description,
            &format!(
                r#"naiveredis_lock_client_exec_error_count{{name=~"[[name]]",instance=~"[[instance]]",job="[[job]]",errorType="{error_type}"}}"#
            ),
            "{{remoteAddress}}",
        );
    }
    layout.finish()
}

pub fn execution_overview(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ExecutionOverview")
        .query_variable("name", "Redis cluster", "job:naiveredis_lock_client_exec_count:sum", "name")
        .graph(
            "job:naiveredis_lock_client_exec_count:sum",
            "Lock acquisitions between two scrapes, per job and cluster",
            r#"job:naiveredis_lock_client_exec_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_lock_client_exec_peak_tps_count:sum",
            "Estimated peak lock acquisitions per second between two scrapes, per job and cluster. The real peak is usually lower",
            r#"job:naiveredis_lock_client_exec_peak_tps_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_lock_client_max_exec_time_millisecond:max",
            "Longest single lock acquisition between two scrapes in milliseconds, per job and cluster",
            r#"job:naiveredis_lock_client_max_exec_time_millisecond:max{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_lock_client_avg_exec_time_millisecond:avg",
            "Average time of a single lock acquisition between two scrapes in milliseconds, per job and cluster",
            r#"job:naiveredis_lock_client_avg_exec_time_millisecond:avg{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .graph(
            "job:naiveredis_lock_client_exec_error_count:sum",
            "Failed lock acquisitions between two scrapes, held locks included, per job and cluster",
            r#"job:naiveredis_lock_client_exec_error_count:sum{name=~"[[name]]",job="[[job]]"}"#,
            "{{name}}",
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_dashboards() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let titles: Vec<String> = dashboards(&ctx).into_iter().map(|d| d.title).collect();

        assert_eq!(
            titles,
            vec![
                "DistributedLock",
                "DistributedLockOverview",
                "Error",
                "Execution",
                "ExecutionDetail",
                "ExecutionOverview"
            ]
        );
        assert_eq!(error(&ctx).panels.len(), 9);
    }
}
