// HotSpot JVM dashboards
use super::DashboardContext;
use crate::domain::dashboard::Dashboard;

pub fn dashboards(ctx: &DashboardContext) -> Vec<Dashboard> {
    vec![
        class_loading(ctx),
        garbage_collector(ctx),
        memory(ctx),
        memory_pool(ctx),
        thread(ctx),
    ]
}

pub fn class_loading(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("ClassLoading")
        .graph(
            "hotspot_loaded_class_count",
            "Classes loaded in the JVM at scrape time",
            r#"hotspot_loaded_class_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_total_loaded_class_count",
            "Classes loaded since the JVM started",
            r#"hotspot_total_loaded_class_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_unloaded_class_count",
            "Classes unloaded since the JVM started",
            r#"hotspot_unloaded_class_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn garbage_collector(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("GarbageCollector")
        .query_variable("collectorName", "Collector", "hotspot_gc_count", "name")
        .graph(
            "hotspot_gc_count",
            "GC runs between two scrapes",
            r#"hotspot_gc_count{name="[[collectorName]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_gc_time_milliseconds",
            "Total time spent in GC between two scrapes, in milliseconds",
            r#"hotspot_gc_time_milliseconds{name="[[collectorName]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_gc_max_duration_millisecond",
            "Longest single GC run between two scrapes, in milliseconds",
            r#"hotspot_gc_max_duration_millisecond{name="[[collectorName]]",job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

pub fn memory(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Memory")
        .graph(
            "hotspot_heap_memory_init_megabytes",
            "Initial size of the heap, in MB",
            r#"hotspot_heap_memory_init_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_heap_memory_used_megabytes",
            "Heap memory in use, in MB",
            r#"hotspot_heap_memory_used_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_heap_memory_committed_megabytes",
            "Heap memory guaranteed to be available, in MB",
            r#"hotspot_heap_memory_committed_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_heap_memory_max_megabytes",
            "Maximum heap memory that can be used, in MB",
            r#"hotspot_heap_memory_max_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_nonheap_memory_init_megabytes",
            "Initial size of non-heap memory, in MB",
            r#"hotspot_nonheap_memory_init_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_nonheap_memory_used_megabytes",
            "Non-heap memory in use, in MB",
            r#"hotspot_nonheap_memory_used_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_nonheap_memory_committed_megabytes",
            "Non-heap memory guaranteed to be available, in MB",
            r#"hotspot_nonheap_memory_committed_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_nonheap_memory_max_megabytes",
            "Maximum non-heap memory that can be used, in MB",
            r#"hotspot_nonheap_memory_max_bytes{job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .finish()
}

pub fn memory_pool(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("MemoryPool")
        .query_variable("poolName", "Memory pool", "hotspot_memory_pool_init_bytes", "name")
        .graph(
            "hotspot_memory_pool_init_megabytes",
            "Initial size of the pool, in MB",
            r#"hotspot_memory_pool_init_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_used_megabytes",
            "Pool memory in use, in MB",
            r#"hotspot_memory_pool_used_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_committed_megabytes",
            "Pool memory guaranteed to be available, in MB",
            r#"hotspot_memory_pool_committed_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_max_megabytes",
            "Maximum pool memory that can be used, in MB",
            r#"hotspot_memory_pool_max_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_peak_init_megabytes",
            "Initial pool size at peak usage between two scrapes, in MB",
            r#"hotspot_memory_pool_peak_init_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_peak_used_megabytes",
            "Pool memory in use at peak usage between two scrapes, in MB",
            r#"hotspot_memory_pool_peak_used_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_peak_committed_megabytes",
            "Committed pool memory at peak usage between two scrapes, in MB",
            r#"hotspot_memory_pool_peak_committed_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_memory_pool_peak_max_megabytes",
            "Maximum pool memory at peak usage between two scrapes, in MB",
            r#"hotspot_memory_pool_peak_max_bytes{name="[[poolName]]",job="[[job]]"} / 1024 / 1024"#,
            "{{instance}}",
        )
        .finish()
}

pub fn thread(ctx: &DashboardContext) -> Dashboard {
    ctx.layout("Thread")
        .graph(
            "hotspot_thread_count",
            "Live threads at scrape time, daemon and non-daemon",
            r#"hotspot_thread_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_daemon_thread_count",
            "Live daemon threads at scrape time",
            r#"hotspot_daemon_thread_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_total_started_thread_count",
            "Threads started since the JVM started",
            r#"hotspot_total_started_thread_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .graph(
            "hotspot_peak_thread_count",
            "Peak live threads between two scrapes",
            r#"hotspot_peak_thread_count{job="[[job]]"}"#,
            "{{instance}}",
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Panel;

    #[test]
    fn test_dashboard_order() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let titles: Vec<String> = dashboards(&ctx).into_iter().map(|d| d.title).collect();
        assert_eq!(
            titles,
            vec!["ClassLoading", "GarbageCollector", "Memory", "MemoryPool", "Thread"]
        );
    }

    #[test]
    fn test_memory_converts_bytes_to_megabytes() {
        let ctx = DashboardContext::new("demo-project", "30s", "Prometheus");
        let dashboard = memory(&ctx);

        assert_eq!(dashboard.panels.len(), 8);
        let Panel::Graph(first) = &dashboard.panels[0];
        assert_eq!(
            first.targets[0].expr,
            r#"hotspot_heap_memory_init_bytes{job="[[job]]"} / 1024 / 1024"#
        );
        assert_eq!(first.targets[0].legend_format, "{{instance}}");
    }
}
