pub mod errors;
pub mod config;
pub mod system;
pub mod cache;

// 重新导出常用类型
pub use cache::{Cache, CacheRegistry};
pub use config::AppConfig;
pub use errors::CacheError;
