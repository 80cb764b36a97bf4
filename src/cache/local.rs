use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache as MokaCache;

/// 条目级 TTL 的过期策略（Moka 默认只支持整个缓存统一 TTL）
struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }
}

#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// 进程内的条目级 TTL 存储（基于 Moka）
///
/// 同时服务两个角色：memory 后端的存储本体，以及 redis 后端内部的
/// 客户端读缓存层。
pub(crate) struct LocalStore {
    inner: MokaCache<String, Entry>,
}

impl LocalStore {
    pub(crate) fn new(max_capacity: u64) -> Self {
        let inner = MokaCache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();

        Self { inner }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.map(|entry| entry.value)
    }

    pub(crate) async fn insert(&self, key: String, value: String, ttl: Duration) {
        self.inner.insert(key, Entry { value, ttl }).await;
    }

    pub(crate) async fn invalidate(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    pub(crate) fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
