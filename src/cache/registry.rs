use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::memory_cache::MemoryCacheFactory;
use crate::cache::redis_cache::RedisCacheFactory;
use crate::cache::traits::Cache;
use crate::errors::CacheError;

/// 缓存后端工厂
///
/// 从未类型化的配置构造一个就绪可用的缓存实例。配置解码、校验和
/// 连接建立都由工厂完成，失败时返回构造错误。
#[async_trait]
pub trait CacheFactory: Send + Sync {
    async fn create(&self, config: &serde_json::Value) -> Result<Arc<dyn Cache>, CacheError>;
}

/// 缓存后端注册表
///
/// 进程启动时构造一次，把后端名称映射到对应工厂。注册只发生在启动
/// 阶段；启动完成后注册表只读，查找无需同步。
pub struct CacheRegistry {
    factories: HashMap<String, Arc<dyn CacheFactory>>,
}

impl CacheRegistry {
    /// 创建空注册表（测试中每个用例用一个新实例）
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// 创建并注册内置后端（memory、redis）
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("memory", Arc::new(MemoryCacheFactory));
        registry.register("redis", Arc::new(RedisCacheFactory));
        registry
    }

    /// 注册后端工厂
    ///
    /// 重复注册同名后端时后注册者生效（确定性行为，仅应在启动阶段调用）。
    pub fn register(&mut self, name: impl Into<String>, factory: Arc<dyn CacheFactory>) {
        let name = name.into();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::warn!("Cache backend re-registered: {}", name);
        }
    }

    /// 按名称构造缓存实例
    ///
    /// 未注册的名称立即返回 [`CacheError::UnknownBackend`]，不发生任何
    /// I/O；其余错误来自工厂自身的配置/连接检查。
    pub async fn create(
        &self,
        name: &str,
        config: &serde_json::Value,
    ) -> Result<Arc<dyn Cache>, CacheError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CacheError::UnknownBackend(name.to_string()))?;

        factory.create(config).await
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::{CacheFactory, CacheRegistry};
    use crate::cache::memory_cache::MemoryCache;
    use crate::cache::traits::Cache;
    use crate::errors::CacheError;

    /// 记录构造次数的测试工厂
    struct CountingFactory(Arc<AtomicUsize>);

    #[async_trait]
    impl CacheFactory for CountingFactory {
        async fn create(
            &self,
            _config: &serde_json::Value,
        ) -> Result<Arc<dyn Cache>, CacheError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(MemoryCache::new(16)))
        }
    }

    #[tokio::test]
    async fn test_unknown_backend_fails_without_io() {
        let registry = CacheRegistry::new();

        let err = registry
            .create("nosuch", &serde_json::Value::Null)
            .await
            .unwrap_err();

        assert!(matches!(err, CacheError::UnknownBackend(name) if name == "nosuch"));
    }

    #[tokio::test]
    async fn test_with_defaults_knows_builtin_backends() {
        let registry = CacheRegistry::with_defaults();

        // memory 后端无需外部依赖，直接可构造
        let cache = registry
            .create("memory", &serde_json::Value::Null)
            .await
            .expect("Failed to create memory backend");
        assert!(cache.get("never-set").await.is_none());

        // redis 后端已注册：失败原因是配置而不是未知名称
        let err = registry
            .create("redis", &serde_json::Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, CacheError::Config(_)));
    }

    #[tokio::test]
    async fn test_duplicate_registration_last_wins() {
        // 1. 同名注册两个工厂
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut registry = CacheRegistry::new();
        registry.register("counting", Arc::new(CountingFactory(first.clone())));
        registry.register("counting", Arc::new(CountingFactory(second.clone())));

        // 2. 构造时只有后注册的工厂被调用
        registry
            .create("counting", &serde_json::Value::Null)
            .await
            .expect("Failed to create backend");

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
