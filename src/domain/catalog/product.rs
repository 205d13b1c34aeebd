// Product - one metric namespace with its folder and dashboard list
use super::{
    async_consumer, async_producer, hotspot, local_cache, memcached, mysql, raven, redis_client,
    redis_lock, redis_publisher, redis_subscriber, rpc_client, rpc_server, DashboardContext,
};
use crate::domain::dashboard::Dashboard;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Hotspot,
    Mysql,
    RpcServer,
    RpcClient,
    RedisClient,
    RedisLock,
    RedisPublisher,
    RedisSubscriber,
    Memcached,
    LocalCache,
    Raven,
    AsyncProducer,
    AsyncConsumer,
}

impl Product {
    pub const ALL: [Product; 13] = [
        Product::Hotspot,
        Product::Mysql,
        Product::RpcServer,
        Product::RpcClient,
        Product::RedisClient,
        Product::RedisLock,
        Product::RedisPublisher,
        Product::RedisSubscriber,
        Product::Memcached,
        Product::LocalCache,
        Product::Raven,
        Product::AsyncProducer,
        Product::AsyncConsumer,
    ];

    /// Resolves a loosely written product type to the first product accepting it.
    pub fn from_type(product_type: &str) -> Option<Product> {
        Self::ALL.into_iter().find(|product| product.is_supported(product_type))
    }

    /// Case-insensitive keyword match, so `NaiveRedis-Lock` and `redis_lock` both select `RedisLock`.
    pub fn is_supported(&self, product_type: &str) -> bool {
        let product_type = product_type.to_lowercase();
        let has = |keyword: &str| product_type.contains(keyword);
        match self {
            Product::Hotspot => has("hotspot") || has("jvm"),
            Product::Mysql => has("mysql"),
            Product::RpcServer => has("rpc") && has("server"),
            Product::RpcClient => has("rpc") && has("client"),
            Product::RedisClient => has("redis") && has("client"),
            Product::RedisLock => has("redis") && has("lock"),
            Product::RedisPublisher => has("redis") && has("pub"),
            Product::RedisSubscriber => has("redis") && has("sub"),
            Product::Memcached => has("memcached"),
            Product::LocalCache => has("local") && has("cache"),
            Product::Raven => has("raven"),
            Product::AsyncProducer => has("async") && has("producer"),
            Product::AsyncConsumer => has("async") && has("consumer"),
        }
    }

    /// Title of the folder the product's dashboards are created in.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Product::Hotspot => "hotspot",
            Product::Mysql => "mysql-jdbc",
            Product::RpcServer => "naiverpc-server",
            Product::RpcClient => "naiverpc-client",
            Product::RedisClient => "naiveredis-client",
            Product::RedisLock => "naiveredis-lock",
            Product::RedisPublisher => "naiveredis-publisher",
            Product::RedisSubscriber => "naiveredis-subscriber",
            Product::Memcached => "naivecache-memcached",
            Product::LocalCache => "naivecache-localcache",
            Product::Raven => "raven",
            Product::AsyncProducer => "naiveasync-producer",
            Product::AsyncConsumer => "naiveasync-consumer",
        }
    }

    pub fn builder_name(&self) -> String {
        format!("{self:?}DashboardsBuilder")
    }

    pub fn dashboards(&self, ctx: &DashboardContext) -> Vec<Dashboard> {
        match self {
            Product::Hotspot => hotspot::dashboards(ctx),
            Product::Mysql => mysql::dashboards(ctx),
            Product::RpcServer => rpc_server::dashboards(ctx),
            Product::RpcClient => rpc_client::dashboards(ctx),
            Product::RedisClient => redis_client::dashboards(ctx),
            Product::RedisLock => redis_lock::dashboards(ctx),
            Product::RedisPublisher => redis_publisher::dashboards(ctx),
            Product::RedisSubscriber => redis_subscriber::dashboards(ctx),
            Product::Memcached => memcached::dashboards(ctx),
            Product::LocalCache => local_cache::dashboards(ctx),
            Product::Raven => raven::dashboards(ctx),
            Product::AsyncProducer => async_producer::dashboards(ctx),
            Product::AsyncConsumer => async_consumer::dashboards(ctx),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}
