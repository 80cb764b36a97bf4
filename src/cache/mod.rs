pub mod memory_cache;
pub mod redis_cache;
pub mod registry;
pub mod traits;

mod local;


pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use registry::{CacheFactory, CacheRegistry};
pub use traits::Cache;

use std::sync::Arc;

use crate::config::CacheConfig;
use crate::errors::CacheError;

/// 根据配置初始化缓存后端
///
/// 在注册表中解析配置的后端名称，构造实例并执行 `start`。
/// 未注册的名称和构造失败都会使启动失败。
pub async fn init_cache(
    registry: &CacheRegistry,
    config: &CacheConfig,
) -> Result<Arc<dyn Cache>, CacheError> {
    tracing::info!("Initializing cache backend: {}", config.backend);

    let cache = registry.create(&config.backend, &config.config).await?;
    cache.start().await?;

    tracing::info!("Cache backend ready: {}", config.backend);

    Ok(cache)
}
