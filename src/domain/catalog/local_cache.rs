// naivecache local cache dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![local_cache(ctx)]
}

pub fn local_cache(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("LocalCache")
        .graph(
            "naivecache_local_cache_total_count",
            "Keys held by the local cache at scrape time",
            r#"naivecache_local_cache_total_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naivecache_local_cache_query_count",
            "Local cache get operations between two scrapes",
            r#"naivecache_local_cache_query_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naivecache_local_cache_query_hit_count",
            "Local cache get hits between two scrapes",
            r#"naivecache_local_cache_query_hit_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naivecache_local_cache_added_count",
            "Keys added to the local cache between two scrapes",
            r#"naivecache_local_cache_added_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naivecache_local_cache_deleted_count",
            "Keys deleted from the local cache between two scrapes",
            r#"naivecache_local_cache_deleted_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "naivecache_local_cache_error_count",
            "Local cache operations that raised an error between two scrapes",
            r#"naivecache_local_cache_error_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}
