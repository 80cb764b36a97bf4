use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    // 注册表错误：请求了未注册的后端名称
    #[error("Unknown cache backend: {0}")]
    UnknownBackend(String),

    // 配置错误：缺失字段、非法取值、TLS 材料无法加载等
    #[error("Configuration error: {0}")]
    Config(String),

    // 连接检查错误：配置合法但存储不可达（与配置错误区分，便于运维定位）
    #[error("Cache connection check failed: {0}")]
    ConnectionCheck(String),

    // 通用错误
    #[error("Internal error: {0}")]
    Internal(String),
}
