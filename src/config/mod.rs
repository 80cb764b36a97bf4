pub mod loader;
pub mod structs;

pub use structs::{AppConfig, CacheConfig, LogConfig};
