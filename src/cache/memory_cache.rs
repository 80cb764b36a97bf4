use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::cache::local::LocalStore;
use crate::cache::registry::CacheFactory;
use crate::cache::traits::Cache;
use crate::errors::CacheError;

/// 内存缓存配置
#[derive(Debug, Clone, Deserialize)]
struct MemoryConfig {
    #[serde(default = "default_max_capacity")]
    max_capacity: u64,
}

fn default_max_capacity() -> u64 {
    10000
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

/// 内存缓存实现（基于 Moka，条目级 TTL）
pub struct MemoryCache {
    store: LocalStore,
    stopped: AtomicBool,
}

impl MemoryCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            store: LocalStore::new(max_capacity),
            stopped: AtomicBool::new(false),
        }
    }

    fn is_stopped(&self, op: &str, key: &str) -> bool {
        let stopped = self.stopped.load(Ordering::SeqCst);
        if stopped {
            tracing::warn!(op, key, "Memory cache already stopped, operation ignored");
        }
        stopped
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn start(&self) -> Result<(), CacheError> {
        // 构造即就绪
        Ok(())
    }

    async fn stop(&self) -> Result<(), CacheError> {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        self.store.invalidate_all();
        tracing::info!("Memory cache stopped");

        Ok(())
    }

    async fn get(&self, key: &str) -> Option<String> {
        if self.is_stopped("get", key) {
            return None;
        }

        self.store.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        if self.is_stopped("set", key) {
            return;
        }

        self.store.insert(key.to_string(), value, ttl).await;
    }

    async fn delete(&self, key: &str) {
        if self.is_stopped("delete", key) {
            return;
        }

        self.store.invalidate(key).await;
    }
}

pub struct MemoryCacheFactory;

#[async_trait]
impl CacheFactory for MemoryCacheFactory {
    async fn create(&self, config: &serde_json::Value) -> Result<Arc<dyn Cache>, CacheError> {
        let cfg = if config.is_null() {
            MemoryConfig::default()
        } else {
            serde_json::from_value(config.clone())
                .map_err(|e| CacheError::Config(format!("Invalid memory cache config: {}", e)))?
        };

        Ok(Arc::new(MemoryCache::new(cfg.max_capacity)))
    }
}
