use std::time::Duration;

use async_trait::async_trait;

use crate::errors::CacheError;

/// 缓存特征
///
/// 所有后端实现的统一契约。缓存是非权威的优化层：读失败一律折叠为
/// `None`，写入和删除是 best-effort 的，错误只记录到日志，绝不向调用方
/// 传播。取消语义由 async 任务上下文承担：丢弃返回的 future（例如包在
/// `tokio::time::timeout` 中）即取消进行中的网络请求。
///
/// 所有方法都可以在多个任务间并发调用，无需外部加锁。
#[async_trait]
pub trait Cache: Send + Sync {
    /// 首次使用前的延迟初始化（多数后端在构造时已就绪，此处为 no-op）
    async fn start(&self) -> Result<(), CacheError>;

    /// 释放持有的资源
    ///
    /// 幂等。`stop` 之后实现必须快速失败：`get` 返回 `None`，
    /// `set`/`delete` 退化为 no-op，并记录 warning。
    async fn stop(&self) -> Result<(), CacheError>;

    /// 获取缓存值
    ///
    /// 未命中、已过期、读失败均返回 `None`，调用方无法区分。
    async fn get(&self, key: &str) -> Option<String>;

    /// 设置缓存值，`ttl` 到期后条目不再可读
    ///
    /// 值的序列化由调用方负责，缓存层只存取字符串。
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// 删除缓存，相对调用返回可以是异步完成的
    async fn delete(&self, key: &str);
}

impl std::fmt::Debug for dyn Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Cache")
    }
}
